pub mod sql_author_repository;

use crate::authors::domain::model::{AuthorEntity, AuthorPatch};
use crate::core::repository::Repository;


pub(crate) trait AuthorRepository: Repository<AuthorEntity, AuthorPatch> {}
