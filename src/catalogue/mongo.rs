use crate::domain::{Command, Section, Sheet, SubSection};

#[allow(clippy::too_many_lines)]
pub fn sheet() -> Sheet {
    Sheet::new(vec![
        Section::with_commands(
            "database",
            "Database Commands",
            "This section covers essential commands for managing databases in MongoDB. You can \
             list all databases, switch between them, or drop them entirely. Creating a database \
             is implicit; MongoDB creates it when you first store data in it.",
            vec![
                Command::new("Show all databases", "show dbs"),
                Command::new("Switch to a database", "use my_database"),
                Command::new("Show current database", "db"),
                Command::new("Drop the current database", "db.dropDatabase()"),
            ],
        ),
        Section::with_commands(
            "collection",
            "Collection Commands",
            "Collections in MongoDB are equivalent to tables in relational databases. They store \
             a group of documents. Here you'll find commands to list, create, rename, and drop \
             collections within your current database.",
            vec![
                Command::new("Show all collections", "show collections"),
                Command::new("Create a collection", "db.createCollection(\"users\")"),
                Command::new("Drop a collection", "db.users.drop()"),
                Command::new(
                    "Rename a collection",
                    "db.users.renameCollection(\"app_users\")",
                ),
            ],
        ),
        Section::with_sub_sections(
            "crud",
            "CRUD Operations",
            "CRUD (Create, Read, Update, Delete) operations are the four basic functions of \
             persistent storage. This section details how to insert, query, modify, and remove \
             documents from your collections. Mastering these commands is fundamental to working \
             with data in MongoDB.",
            vec![
                SubSection::new(
                    "Create (Insert) Documents",
                    vec![
                        Command::new(
                            "Insert a single document",
                            "db.users.insertOne({ username: \"alice\", age: 30, city: \"New York\" })",
                        ),
                        Command::new(
                            "Insert multiple documents",
                            "db.users.insertMany([\n   { username: \"bob\", age: 25, city: \"Paris\" },\n   { username: \"charlie\", age: 35, city: \"London\" }\n])",
                        ),
                    ],
                ),
                SubSection::new(
                    "Read (Query) Documents",
                    vec![
                        Command::new("Find all documents", "db.users.find()"),
                        Command::new(
                            "Find documents where age is 25",
                            "db.users.find({ age: 25 })",
                        ),
                    ],
                ),
                SubSection::new(
                    "Update Documents",
                    vec![
                        Command::new(
                            "Update a single document",
                            "db.users.updateOne(\n   { username: \"alice\" },\n   { $set: { age: 31 } }\n)",
                        ),
                        Command::new(
                            "Update multiple documents",
                            "db.users.updateMany(\n   { city: \"New York\" },\n   { $set: { country: \"USA\" } }\n)",
                        ),
                    ],
                ),
                SubSection::new(
                    "Delete Documents",
                    vec![
                        Command::new(
                            "Delete a single document",
                            "db.users.deleteOne({ username: \"charlie\" })",
                        ),
                        Command::new(
                            "Delete multiple documents",
                            "db.users.deleteMany({ city: \"London\" })",
                        ),
                    ],
                ),
            ],
        ),
        Section::with_commands(
            "indexing",
            "Indexing",
            "Indexes support the efficient execution of queries in MongoDB. Without indexes, \
             MongoDB must perform a collection scan, i.e., scan every document in a collection, \
             to select those documents that match the query statement. This section shows how to \
             create and manage various types of indexes.",
            vec![
                Command::new(
                    "Create an ascending index",
                    "db.users.createIndex({ username: 1 })",
                ),
                Command::new(
                    "Create a compound index",
                    "db.users.createIndex({ city: 1, age: -1 })",
                ),
                Command::new("List all indexes", "db.users.getIndexes()"),
                Command::new(
                    "Drop a specific index",
                    "db.users.dropIndex(\"username_1\")",
                ),
            ],
        ),
    ])
}
