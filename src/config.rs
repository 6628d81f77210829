//! Fixed external endpoints and contact literals. Nothing here is
//! configurable at runtime.

/// Hosted form backend the contact form posts to.
pub fn get_form_endpoint() -> &'static str {
    "https://formspree.io/f/xwpndprw"
}

pub const CONTACT_EMAIL: &str = "michal.dobrzynski@requena.pl";
pub const CONTACT_PHONE: &str = "+48 574 143 447";
pub const COMPANY_SITE_LABEL: &str = "www.elixaai.com";
pub const COMPANY_SITE_URL: &str = "https://www.elixaai.com";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/requenash/";
