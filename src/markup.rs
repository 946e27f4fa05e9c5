use crate::{Document, Element};
use regex::Regex;

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source", "track", "wbr",
];

pub fn parse(markup: &str) -> Document {
    let comments = Regex::new(r"(?s)<!--.*?-->").unwrap();
    let markup = comments.replace_all(markup, "");
    let declarations = Regex::new(r"<![^>]*>").unwrap();
    let markup = declarations.replace_all(&markup, "");
    let markup = &*markup;
    let tags = Regex::new(r#"<[[:space:]]*(/?)[[:space:]]*([a-zA-Z][a-zA-Z0-9-]*)((?:[^<>"']|"[^"]*"|'[^']*')*?)[[:space:]]*(/?)>"#).unwrap();
    let attributes = Regex::new(r#"([a-zA-Z_][a-zA-Z0-9_:.-]*)[[:space:]]*=[[:space:]]*(?:"([^"]*)"|'([^']*)')"#).unwrap();
    let mut elements: Vec<Element> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut offset = 0;
    for captures in tags.captures_iter(markup) {
        let range = captures.get(0).unwrap().range();
        if let Some(&index) = stack.last() {
            elements[index].append_text(&markup[offset..range.start]);
        }
        offset = range.end;
        let tag = captures[2].to_lowercase();
        if &captures[1] == "/" {
            while let Some(index) = stack.pop() {
                if elements[index].tag() == tag {
                    break;
                }
            }
        } else {
            let mut found = Vec::new();
            for attribute in attributes.captures_iter(&captures[3]) {
                let value = attribute.get(2).or_else(|| attribute.get(3)).map_or("", |value| value.as_str());
                found.push((attribute[1].to_lowercase(), value.to_string()));
            }
            let index = elements.len();
            elements.push(Element::new(tag.as_str(), found));
            if &captures[4] != "/" && !VOID_TAGS.contains(&tag.as_str()) {
                stack.push(index);
            }
        }
    }
    Document::new(elements)
}
