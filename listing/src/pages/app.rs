use hypertext::prelude::*;

use super::{LinkList, ListingEntry};

/// The React entry component listing every generated book.
pub struct App<'a> {
    pub title: &'a str,
    pub entries: &'a [ListingEntry],
}

impl App<'_> {
    pub fn source(&self) -> String {
        let list = LinkList {
            entries: self.entries,
        }
        .render()
        .into_inner();

        format!(
            r"
function App() {{
  return (
    <>
      <h1>{title}</h1>
      {list}
    </>
  );
}}

export default App;
",
            title = self.title,
            list = list,
        )
    }
}
