use common::phone::PhoneValue;
use common::submission::SubmitError;
use common::webhook::Delivery;

pub enum Msg {
    Name(String),
    Email(String),
    Phone(PhoneValue),
    Subject(String),
    Message(String),
    Submit,
    Finished(Result<Delivery, SubmitError>),
    ResetStatus,
}
