pub mod add_server;
pub mod get_servers;

pub use add_server::AddAuthServerUseCase;
pub use get_servers::GetAuthServersUseCase;
