use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn author_id(&self) -> i64;
    fn remaining_amount(&self) -> i64;

    // no copy left to lend
    fn is_exhausted(&self) -> bool {
        self.remaining_amount() <= 0
    }
}
