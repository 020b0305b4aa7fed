pub mod chat_bot;
pub mod contact_form;
pub mod generated_link;
pub mod phone_input;
