//! Pages in the console

mod index;
mod not_found;

pub use index::*;
pub use not_found::*;

use yew_nested_router::Target;

#[derive(Clone, Debug, PartialEq, Eq, Target)]
pub enum AppRoute {
    #[target(index)]
    Index,
}
