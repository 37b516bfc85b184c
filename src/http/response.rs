//! Response document construction.
//!
//! # Responsibilities
//! - Render the greeting page body around the configured value
//! - Keep the rendered bytes stable for a given configuration

/// Render the greeting document.
///
/// The value is substituted verbatim, without HTML escaping: a value
/// containing markup is reflected into the page as markup. Known defect,
/// kept because the exact served bytes are part of the page's contract.
pub fn greeting_page(db_password: &str) -> String {
    format!(
        "<h1>Welcome to My Node App on Kubernetes!</h1>\n<p>Secret DB_PASSWORD is: {db_password}</p>"
    )
}
