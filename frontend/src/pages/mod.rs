pub mod about;
pub mod contact;
pub mod email_link;
pub mod guides;
pub mod home;
pub mod not_found;
pub mod portfolio;
pub mod services;
pub mod tools_index;
pub mod whatsapp_link;
