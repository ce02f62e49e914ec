table! {
    users (id) {
        id -> Integer,
        name -> Text,
        account_number -> Text,
        dob -> Date,
        city -> Text,
        password -> Text,
        balance -> Double,
        contact_number -> Text,
        email -> Text,
        address -> Text,
        is_active -> Bool,
    }
}

table! {
    transactions (id) {
        id -> Integer,
        account_number -> Text,
        transaction_type -> Text,
        amount -> Double,
        date -> Timestamp,
    }
}

allow_tables_to_appear_in_same_query!(users, transactions,);
