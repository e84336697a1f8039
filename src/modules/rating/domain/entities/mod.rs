pub mod pillar;
pub mod question;
pub mod rating;
