//! Category listing

use crate::models::Category;

/// List the fixed category set, one label per line
pub fn format_category_list() -> String {
    let mut output = String::new();
    for category in Category::ALL {
        output.push_str(category.label());
        output.push('\n');
    }
    output
}
