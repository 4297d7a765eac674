// Resume builder storage: one markdown document per user, read and replaced as a whole.

pub mod handlers;
pub mod store;
