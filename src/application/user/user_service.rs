use tracing::info;

use super::views::{UserLoanHistoryView, UserView};
use crate::application::errors::{ApplicationError, Result};
use crate::application::ServiceDependencies;
use crate::domain::{User, UserId, commands::*};

/// Register a user
pub async fn save_user(deps: &ServiceDependencies, cmd: SaveUser) -> Result<UserId> {
    let user = User::new(cmd.name, cmd.age)?;

    deps.user_repository
        .save(&user)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(user_id = %user.id().value(), "User registered");
    Ok(user.id())
}

/// List all users
pub async fn get_users(deps: &ServiceDependencies) -> Result<Vec<UserView>> {
    let users = deps
        .user_repository
        .find_all()
        .await
        .map_err(ApplicationError::RepositoryError)?;

    Ok(users.iter().map(UserView::from).collect())
}

/// Rename a user
///
/// The new name follows the same non-blank rule as registration.
pub async fn update_user_name(deps: &ServiceDependencies, cmd: UpdateUserName) -> Result<()> {
    let mut user = deps
        .user_repository
        .find_by_id(cmd.id)
        .await
        .map_err(ApplicationError::RepositoryError)?
        .ok_or_else(|| ApplicationError::UserNotFound {
            key: cmd.id.value().to_string(),
        })?;

    user.update_name(cmd.name)?;

    deps.user_repository
        .save(&user)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(user_id = %user.id().value(), "User renamed");
    Ok(())
}

/// Delete a user by exact name, together with all of its loan histories
pub async fn delete_user(deps: &ServiceDependencies, name: &str) -> Result<()> {
    let user = deps
        .user_repository
        .find_by_name(name)
        .await
        .map_err(ApplicationError::RepositoryError)?
        .ok_or_else(|| ApplicationError::UserNotFound {
            key: name.to_string(),
        })?;

    deps.user_repository
        .delete(&user)
        .await
        .map_err(ApplicationError::RepositoryError)?;

    info!(
        user_id = %user.id().value(),
        histories = user.loan_histories().len(),
        "User deleted"
    );
    Ok(())
}

/// Loan history report for every user
pub async fn get_user_loan_histories(
    deps: &ServiceDependencies,
) -> Result<Vec<UserLoanHistoryView>> {
    let users = deps
        .user_repository
        .find_all()
        .await
        .map_err(ApplicationError::RepositoryError)?;

    Ok(users.iter().map(UserLoanHistoryView::from).collect())
}
