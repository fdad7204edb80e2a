mod auth;
mod listing;
