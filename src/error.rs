use thiserror::Error;

/// Ways a positional operation can be misused.
///
/// Every variant describes a cursor sitting on the past-the-end position,
/// which has no element and no successor link to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("cannot advance a cursor that is already past the end of the list")]
    AdvancePastEnd,

    #[error("cannot insert after the past-the-end position")]
    InsertAfterEnd,

    #[error("cannot erase after the past-the-end position")]
    EraseAfterEnd,
}
