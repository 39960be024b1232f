mod user_service;
mod views;

pub use user_service::{
    delete_user, get_user_loan_histories, get_users, save_user, update_user_name,
};
pub use views::{BookHistoryView, UserLoanHistoryView, UserView};
