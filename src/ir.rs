#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { items: Vec<String> },
    CodeBlock { lang: String, code: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Text { value: String },
    Code { value: String },
    Link { label: String, href: String },
}
