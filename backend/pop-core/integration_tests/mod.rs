mod auth;
mod helpers;
mod organization;
mod resources;
mod search;
mod status;
mod verbs;
