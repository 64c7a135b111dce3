//! Diesel schema for taskboard persistence.

diesel::table! {
    /// One taskboard row per `(user, form type, date)`.
    ///
    /// At-most-one per key is maintained by the synchronizer's
    /// find-before-insert; the table carries no unique constraint beyond
    /// the composite primary key, mirroring the hosted backend.
    taskboard_records (user_id, form_type, date) {
        /// Owning user identifier.
        user_id -> Uuid,
        /// Form type storage string.
        #[max_length = 50]
        form_type -> Varchar,
        /// Form date storage key (`YYYY-MM-DD`).
        #[max_length = 10]
        date -> Varchar,
        /// Turn metadata per shift.
        turn_data -> Jsonb,
        /// Task values per shift.
        tasks -> Jsonb,
        /// Ad-hoc processing rows.
        table_rows -> Jsonb,
        /// Last-viewed shift tab.
        #[max_length = 10]
        active_tab -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// System-wide processing log, append-only.
    processing_log (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Timestamp the entry was logged at.
        logged_at -> Timestamptz,
        /// Processing time as entered on the form.
        #[max_length = 20]
        entry_time -> Varchar,
        /// Task description.
        #[max_length = 255]
        task_label -> Varchar,
        /// System the operation ran against.
        #[max_length = 100]
        system_name -> Varchar,
        /// Operation number; deliberately not unique (see port docs).
        #[max_length = 50]
        operation_number -> Nullable<Varchar>,
        /// Executing operator.
        #[max_length = 100]
        executed_by -> Varchar,
        /// Dashboard category tag.
        #[max_length = 50]
        category_tag -> Varchar,
    }
}
