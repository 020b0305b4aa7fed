//! Typed content tree shared by every language.
//!
//! Each language provides one `Content` value (`en::EN`, `he::HE`). Because the
//! values are plain struct literals, a missing label is a compile error rather
//! than a runtime fallback string. Dynamic copy such as the chatbot reply that
//! echoes the visitor's name is a plain function in the tree.

pub mod en;
pub mod he;

use chrono::{Datelike, NaiveDate};

use crate::language::Language;
use crate::links::EmailProvider;
use crate::submission::ContactField;
use crate::validation::FieldError;

pub struct Content {
    pub nav: Nav,
    pub hero: Hero,
    pub services: Services,
    pub about: About,
    pub portfolio: Portfolio,
    pub guides: Guides,
    pub contact: Contact,
    pub footer: Footer,
    pub common: Common,
    pub not_found: NotFound,
    pub chatbot: Chatbot,
    pub tools: Tools,
    pub phone_input: PhoneInputText,
    pub seo: Seo,
}

pub struct Nav {
    pub home: &'static str,
    pub services: &'static str,
    pub about: &'static str,
    pub portfolio: &'static str,
    pub guides: &'static str,
    pub contact: &'static str,
    pub tools: &'static str,
    pub language: &'static str,
    pub menu: &'static str,
}

pub struct Hero {
    pub headline_line1: &'static str,
    pub headline_line2: &'static str,
    pub subheadline: &'static str,
    pub cta_primary: &'static str,
    pub cta_secondary: &'static str,
}

pub struct ServiceItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct ProcessStep {
    pub step: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Services {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Automation, AI, consulting, web development, in display order.
    pub items: [ServiceItem; 4],
    pub cta: &'static str,
    pub process_title: &'static str,
    pub process_subtitle: &'static str,
    pub steps: [ProcessStep; 4],
    pub ready: &'static str,
    pub ready_subtitle: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ValueItem {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct About {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub intro: &'static str,
    pub cta: &'static str,
    pub story_title: &'static str,
    pub story_p1: &'static str,
    pub story_p2: &'static str,
    pub technologies: &'static str,
    pub skills: &'static [&'static str],
    pub values_title: &'static str,
    pub values: [ValueItem; 3],
    pub stats: [Stat; 3],
    pub lets_talk: &'static str,
}

pub struct PortfolioItem {
    pub id: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub result: &'static str,
    pub technologies: &'static [&'static str],
}

pub struct Portfolio {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub view_project: &'static str,
    pub want_similar: &'static str,
    pub want_similar_subtitle: &'static str,
    pub items: &'static [PortfolioItem],
}

pub struct GuidePost {
    pub id: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const HE_MONTHS: [&str; 12] = [
    "ינואר", "פברואר", "מרץ", "אפריל", "מאי", "יוני", "יולי", "אוגוסט", "ספטמבר", "אוקטובר",
    "נובמבר", "דצמבר",
];

impl GuidePost {
    /// Publication date written out for `language`. A date that does not
    /// parse as `YYYY-MM-DD` is shown verbatim.
    pub fn display_date(&self, language: Language) -> String {
        let Ok(date) = NaiveDate::parse_from_str(self.date, "%Y-%m-%d") else {
            return self.date.to_string();
        };
        let month = date.month0() as usize;
        match language {
            Language::En => format!("{} {}, {}", EN_MONTHS[month], date.day(), date.year()),
            Language::He => format!("{} ב{} {}", date.day(), HE_MONTHS[month], date.year()),
        }
    }
}

pub struct Guides {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub read_more: &'static str,
    pub stay_updated: &'static str,
    pub stay_updated_subtitle: &'static str,
    pub subscribe: &'static str,
    pub no_spam: &'static str,
    pub email_placeholder: &'static str,
    pub email_invalid: &'static str,
    pub subscribed: &'static str,
    pub subscribe_error: &'static str,
    pub posts: &'static [GuidePost],
}

pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub connect_with: &'static str,
    pub form_title: &'static str,
    pub name_label: &'static str,
    pub name_placeholder: &'static str,
    pub name_required: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub email_required: &'static str,
    pub email_invalid: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub phone_required: &'static str,
    pub phone_invalid: &'static str,
    pub subject_label: &'static str,
    pub subject_placeholder: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
    pub message_required: &'static str,
    pub submit_button: &'static str,
    pub submitting: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub coming_soon: &'static str,
}

impl Contact {
    /// Inline message shown next to `field` for `error`.
    pub fn field_error(&self, field: ContactField, error: FieldError) -> &'static str {
        match (field, error) {
            (ContactField::Name, _) => self.name_required,
            (ContactField::Email, FieldError::InvalidEmail) => self.email_invalid,
            (ContactField::Email, _) => self.email_required,
            (ContactField::Phone, FieldError::InvalidPhone) => self.phone_invalid,
            (ContactField::Phone, _) => self.phone_required,
            (ContactField::Message, _) => self.message_required,
        }
    }
}

pub struct Footer {
    pub tagline: &'static str,
    pub quick_links: &'static str,
    pub connect: &'static str,
    pub rights: &'static str,
}

pub struct Common {
    pub learn_more: &'static str,
    pub get_started: &'static str,
    pub back_home: &'static str,
    pub loading: &'static str,
}

pub struct NotFound {
    pub title: &'static str,
    pub message: &'static str,
    pub cta: &'static str,
}

pub struct Chatbot {
    pub greeting: &'static str,
    pub ask_email: fn(&str) -> String,
    pub ask_question: &'static str,
    pub complete: &'static str,
    pub placeholder_name: &'static str,
    pub placeholder_email: &'static str,
    pub placeholder_question: &'static str,
    pub assistant_name: &'static str,
    pub usually_replies: &'static str,
    pub new_conversation: &'static str,
    pub open_label: &'static str,
    pub close_label: &'static str,
    pub send_label: &'static str,
}

pub struct EmailProviders {
    pub gmail: &'static str,
    pub outlook: &'static str,
    pub mailto: &'static str,
}

impl EmailProviders {
    pub fn label(&self, provider: EmailProvider) -> &'static str {
        match provider {
            EmailProvider::Gmail => self.gmail,
            EmailProvider::Outlook => self.outlook,
            EmailProvider::Mailto => self.mailto,
        }
    }
}

pub struct EmailTool {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card_description: &'static str,
    pub card_cta: &'static str,
    pub provider_label: &'static str,
    pub providers: EmailProviders,
    pub provider_note: &'static str,
    pub to_label: &'static str,
    pub to_placeholder: &'static str,
    pub to_required: &'static str,
    pub to_invalid: &'static str,
    pub subject_label: &'static str,
    pub subject_placeholder: &'static str,
    pub subject_required: &'static str,
    pub body_label: &'static str,
    pub body_placeholder: &'static str,
    pub body_required: &'static str,
}

pub struct WhatsAppTool {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card_description: &'static str,
    pub card_cta: &'static str,
    pub phone_label: &'static str,
    pub phone_placeholder: &'static str,
    pub phone_error: &'static str,
    pub message_label: &'static str,
    pub message_placeholder: &'static str,
}

pub struct Tools {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub all_tools: &'static str,
    pub generated_link: &'static str,
    pub copy_button: &'static str,
    pub copied_button: &'static str,
    pub test_link: &'static str,
    pub generate_button: &'static str,
    pub email: EmailTool,
    pub whatsapp: WhatsAppTool,
}

pub struct PhoneInputText {
    pub search_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub no_results: &'static str,
}

pub struct Seo {
    pub title: &'static str,
    pub description: &'static str,
}

impl Content {
    /// Fixed labels of the static regions every page shows (header, footer,
    /// form chrome, tools). Used to check that a language switch leaves no
    /// label from the other language behind.
    pub fn static_labels(&self) -> Vec<&'static str> {
        let nav = &self.nav;
        let contact = &self.contact;
        let tools = &self.tools;
        vec![
            nav.home,
            nav.services,
            nav.about,
            nav.portfolio,
            nav.guides,
            nav.contact,
            nav.tools,
            self.hero.headline_line1,
            self.hero.headline_line2,
            self.hero.cta_primary,
            self.hero.cta_secondary,
            self.footer.tagline,
            self.footer.quick_links,
            self.footer.connect,
            self.footer.rights,
            contact.title,
            contact.subtitle,
            contact.form_title,
            contact.name_label,
            contact.email_label,
            contact.phone_label,
            contact.message_label,
            contact.submit_button,
            contact.success,
            contact.error,
            tools.title,
            tools.subtitle,
            tools.copy_button,
            tools.copied_button,
            tools.test_link,
            tools.generate_button,
            tools.email.title,
            tools.email.to_label,
            tools.whatsapp.title,
            tools.whatsapp.phone_label,
            self.not_found.title,
            self.not_found.cta,
            self.phone_input.search_placeholder,
            self.phone_input.no_results,
            self.chatbot.greeting,
            self.chatbot.new_conversation,
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::language::Language;
    use crate::submission::ContactField;
    use crate::validation::FieldError;

    fn has_hebrew_letter(text: &str) -> bool {
        text.chars().any(|c| ('\u{05D0}'..='\u{05EA}').contains(&c))
    }

    #[test]
    fn switching_to_hebrew_replaces_every_static_label() {
        let en = Language::En.content().static_labels();
        let he = Language::He.content().static_labels();
        assert_eq!(en.len(), he.len());
        for (english, hebrew) in en.iter().zip(he.iter()) {
            assert_ne!(english, hebrew);
            assert!(has_hebrew_letter(hebrew), "untranslated label: {hebrew}");
            assert!(!he.contains(english), "english label left behind: {english}");
        }
    }

    #[test]
    fn chatbot_reply_embeds_name() {
        let en = (Language::En.content().chatbot.ask_email)("Dana");
        let he = (Language::He.content().chatbot.ask_email)("דנה");
        assert!(en.contains("Dana"));
        assert!(he.contains("דנה"));
    }

    #[test]
    fn contact_field_errors_are_distinct_per_case() {
        let contact = &Language::En.content().contact;
        assert_eq!(
            contact.field_error(ContactField::Email, FieldError::InvalidEmail),
            contact.email_invalid
        );
        assert_eq!(
            contact.field_error(ContactField::Email, FieldError::Required),
            contact.email_required
        );
        assert_eq!(
            contact.field_error(ContactField::Phone, FieldError::InvalidPhone),
            contact.phone_invalid
        );
    }

    #[test]
    fn both_languages_list_the_same_portfolio_and_guides() {
        let en = Language::En.content();
        let he = Language::He.content();
        let ids = |items: &[crate::content::PortfolioItem]| {
            items.iter().map(|item| item.id).collect::<Vec<_>>()
        };
        assert_eq!(ids(en.portfolio.items), ids(he.portfolio.items));
        assert_eq!(en.guides.posts.len(), he.guides.posts.len());
    }

    #[test]
    fn guide_dates_are_localized() {
        let post = &Language::En.content().guides.posts[0];
        assert_eq!(post.display_date(Language::En), "December 1, 2025");
        assert_eq!(post.display_date(Language::He), "1 בדצמבר 2025");

        let broken = crate::content::GuidePost { date: "soon", ..*post };
        assert_eq!(broken.display_date(Language::En), "soon");
    }
}
