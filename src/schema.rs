diesel::table! {
    category_types (id) {
        id -> Int4,
        category -> Varchar,
    }
}

diesel::table! {
    consumers (id) {
        id -> Int4,
        user_id -> Int4,
        #[sql_name = "type"]
        kind -> Varchar,
        license -> Varchar,
    }
}

diesel::table! {
    matching (id) {
        id -> Int4,
        requested_food_id -> Int4,
        supplier_food_id -> Int4,
        status -> Varchar,
    }
}

diesel::table! {
    requested_food (id) {
        id -> Int4,
        consumer_id -> Int4,
        category_type -> Int4,
        vegetarian_status -> Bool,
        quantity -> Int4,
        active -> Bool,
        time -> Timestamptz,
    }
}

diesel::table! {
    suppliers (id) {
        id -> Int4,
        user_id -> Int4,
        #[sql_name = "type"]
        kind -> Varchar,
        masked -> Bool,
        license -> Varchar,
    }
}

diesel::table! {
    surplus_food (id) {
        id -> Int4,
        supplier_id -> Int4,
        category_type -> Int4,
        vegetarian_status -> Bool,
        quantity -> Int4,
        active -> Bool,
        expiry -> Timestamptz,
        description -> Text,
    }
}

diesel::table! {
    users (id) {
        id -> Int4,
        username -> Varchar,
        phone -> Varchar,
        email -> Varchar,
        password -> Varchar,
        address -> Varchar,
        zip -> Varchar,
    }
}

diesel::joinable!(consumers -> users (user_id));
diesel::joinable!(suppliers -> users (user_id));
diesel::joinable!(requested_food -> consumers (consumer_id));
diesel::joinable!(requested_food -> category_types (category_type));
diesel::joinable!(surplus_food -> suppliers (supplier_id));
diesel::joinable!(surplus_food -> category_types (category_type));
diesel::joinable!(matching -> requested_food (requested_food_id));
diesel::joinable!(matching -> surplus_food (supplier_food_id));

diesel::allow_tables_to_appear_in_same_query!(
    category_types,
    consumers,
    matching,
    requested_food,
    suppliers,
    surplus_food,
    users,
);
