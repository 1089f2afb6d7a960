pub(crate) mod controller;
pub(crate) mod form;
pub(crate) mod questionnaire;
