use hypertext::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Folder name, also the link text.
    pub name: String,
    /// `/outputs/<name>/<name>.html`
    pub href: String,
}

impl ListingEntry {
    pub fn new(name: impl Into<String>, url_prefix: &str) -> Self {
        let name = name.into();
        let href = format!("{}/{name}/{name}.html", url_prefix.trim_end_matches('/'));
        Self { name, href }
    }
}

pub struct LinkList<'a> {
    pub entries: &'a [ListingEntry],
}

impl Renderable for LinkList<'_> {
    fn render_to(&self, buffer: &mut hypertext::Buffer<hypertext::context::Node>) {
        rsx! {
            <ul>
                @for entry in self.entries {
                    <li>
                        <a href=(entry.href)>(entry.name)</a>
                    </li>
                }
            </ul>
        }
        .render_to(buffer);
    }
}
