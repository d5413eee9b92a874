use service::Repositories;

/// Shared handler state: the repository set, nothing else.
#[derive(Clone)]
pub struct ServerState {
    pub repos: Repositories,
}

impl ServerState {
    pub fn new(repos: Repositories) -> Self { Self { repos } }
}
