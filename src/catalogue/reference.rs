use crate::domain::ReferenceTable;

pub fn tables() -> Vec<ReferenceTable> {
    vec![
        ReferenceTable::new(
            "users",
            vec!["user_id", "username", "age", "city"],
            vec![
                vec!["1", "alice", "30", "New York"],
                vec!["2", "bob", "25", "Paris"],
                vec!["3", "charlie", "35", "London"],
            ],
        ),
        ReferenceTable::new(
            "products",
            vec!["product_id", "product_name", "price", "seller_id"],
            vec![
                vec!["101", "Laptop", "1200.00", "1"],
                vec!["102", "Mouse", "25.00", "2"],
                vec!["103", "Keyboard", "75.00", "1"],
            ],
        ),
    ]
}
