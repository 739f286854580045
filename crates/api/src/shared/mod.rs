pub mod auth;
#[cfg(test)]
pub mod failing_repos;
pub mod usecase;
