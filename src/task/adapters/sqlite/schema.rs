//! Diesel schema for task storage.

diesel::table! {
    /// Task records captured from the create and update forms.
    tasks (id) {
        /// Store-allocated task identifier.
        id -> Integer,
        /// Short task title.
        #[max_length = 100]
        title -> Varchar,
        /// Free-text task description.
        #[max_length = 250]
        description -> Varchar,
        /// Calendar due date.
        due_date -> Date,
    }
}
