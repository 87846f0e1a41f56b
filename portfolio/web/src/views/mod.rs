mod projects;

pub use projects::ProjectsList;
