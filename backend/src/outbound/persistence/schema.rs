// Diesel table definitions for the booking schema (MySQL).

diesel::table! {
    plans (id) {
        id -> BigInt,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 255]
        keyword -> Varchar,
        price -> BigInt,
    }
}

diesel::table! {
    use diesel::sql_types::*;
    use diesel::mysql::sql_types::Datetime;

    users (id) {
        #[max_length = 36]
        id -> Varchar,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        #[max_length = 50]
        phone_number -> Varchar,
        #[max_length = 255]
        address -> Varchar,
        date_of_birth -> Nullable<Date>,
        registered_at -> Datetime,
        #[max_length = 50]
        status -> Varchar,
    }
}

diesel::table! {
    reservations (id) {
        id -> BigInt,
        #[max_length = 36]
        user_id -> Varchar,
        plan_id -> BigInt,
        number -> BigInt,
        checkin -> Date,
        checkout -> Date,
        total -> BigInt,
    }
}

diesel::allow_tables_to_appear_in_same_query!(plans, reservations, users);
