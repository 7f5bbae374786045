pub mod display;
pub mod record;

pub use display::DisplayItem;
pub use record::{
    AdjectiveRecord, Gender, NounRecord, UndoEvent, VerbForms, VerbRecord, VerbWithForms,
    WordCategory, WordRecord,
};
