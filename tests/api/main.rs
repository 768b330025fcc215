mod auth_gate;
mod delete_account;
mod helpers;
mod info;
mod logout;
mod password_change;
mod register;
