use crate::catalog::{Language, ALGORITHM_CATEGORIES};

/// Render the supported languages and known categories as plain text.
pub fn render() -> String {
    let mut out = String::from("Supported languages:\n");
    for lang in Language::ALL {
        out.push_str(&format!(
            "  {:<12} .{}\n",
            lang.as_str(),
            lang.file_extension()
        ));
    }

    out.push_str("\nAlgorithm categories (--category accepts any text):\n");
    for category in ALGORITHM_CATEGORIES {
        out.push_str(&format!("  {}\n", category));
    }
    out
}

pub fn run() {
    print!("{}", render());
}
