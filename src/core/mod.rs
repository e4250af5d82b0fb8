pub mod api;
pub mod contact;
pub mod guard;
pub mod outcome;
pub mod page;
pub mod planner;

#[cfg(test)]
pub(crate) mod testing;
