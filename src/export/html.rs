// src/export/html.rs

//! Minimal HTML document builder for static reports.

/// Escape text for use inside HTML elements and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub struct HtmlDocument {
    title: String,
    stylesheet: String,
    body: Vec<String>,
}

impl HtmlDocument {
    pub fn new(title: &str, stylesheet: &str) -> Self {
        Self {
            title: title.to_string(),
            stylesheet: stylesheet.to_string(),
            body: Vec::new(),
        }
    }

    pub fn h1(&mut self, content: &str) -> &mut Self {
        self.body.push(format!("<h1>{}</h1>", escape(content)));
        self
    }

    pub fn h2(&mut self, content: &str) -> &mut Self {
        self.body.push(format!("<h2>{}</h2>", escape(content)));
        self
    }

    pub fn p(&mut self, content: &str) -> &mut Self {
        self.body.push(format!("<p>{}</p>", escape(content)));
        self
    }

    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> &mut Self {
        let mut tbl = vec!["<table>".to_string(), "<tr>".to_string()];
        for h in headers {
            tbl.push(format!("<th>{}</th>", escape(h)));
        }
        tbl.push("</tr>".to_string());

        for row in rows {
            tbl.push("<tr>".to_string());
            for col in row {
                tbl.push(format!("<td>{}</td>", escape(col)));
            }
            tbl.push("</tr>".to_string());
        }
        tbl.push("</table>".to_string());

        self.body.push(tbl.join("\n"));
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("  <meta charset=\"UTF-8\">\n");
        out.push_str(
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        out.push_str(&format!(
            "  <link rel=\"stylesheet\" href=\"{}\">\n",
            escape(&self.stylesheet)
        ));
        out.push_str(&format!("  <title>{}</title>\n", escape(&self.title)));
        out.push_str("</head>\n<body>\n");
        for block in &self.body {
            out.push_str(block);
            out.push('\n');
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_cells() {
        let mut doc = HtmlDocument::new("T", "s.css");
        doc.table(&["A"], &[vec!["<b>&".to_string()]]);
        let html = doc.render();
        assert!(html.contains("<td>&lt;b&gt;&amp;</td>"));
    }

    #[test]
    fn body_keeps_insertion_order() {
        let mut doc = HtmlDocument::new("Report", "s.css");
        doc.h1("first").p("second");
        let html = doc.render();
        let a = html.find("<h1>first</h1>").unwrap();
        let b = html.find("<p>second</p>").unwrap();
        assert!(a < b);
        assert!(html.ends_with("</body>\n</html>\n"));
    }
}
