use chrono::Datelike;
use leptos::prelude::*;

pub const EXPLORE_LINKS: [&str; 3] = ["Fragrances", "Collections", "Gifts"];
pub const CONNECT_LINKS: [&str; 3] = ["Instagram", "Twitter", "Pinterest"];
pub const LEGAL_LINKS: [&str; 2] = ["Privacy", "Terms"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Vogue Perfum. Paris - Tokyo - New York.", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-top">
                    <span class="footer-mark">"VP"</span>
                    <div class="footer-columns">
                        <div>
                            <h4 class="footer-heading">"Explore"</h4>
                            <ul class="footer-list footer-list--serif">
                                {EXPLORE_LINKS.iter().map(|label| view! { <li>{*label}</li> }).collect_view()}
                            </ul>
                        </div>
                        <div>
                            <h4 class="footer-heading">"Connect"</h4>
                            <ul class="footer-list">
                                {CONNECT_LINKS.iter().map(|label| view! { <li>{*label}</li> }).collect_view()}
                            </ul>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{copyright_line(year)}</p>
                    <div class="footer-legal">
                        {LEGAL_LINKS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Vogue Perfum. Paris - Tokyo - New York."
        );
    }

    #[test]
    fn link_columns() {
        assert_eq!(EXPLORE_LINKS, ["Fragrances", "Collections", "Gifts"]);
        assert_eq!(CONNECT_LINKS, ["Instagram", "Twitter", "Pinterest"]);
        assert_eq!(LEGAL_LINKS, ["Privacy", "Terms"]);
    }
}
