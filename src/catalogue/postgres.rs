use crate::domain::{Command, Section, Sheet};

pub fn sheet() -> Sheet {
    Sheet::new(vec![
        Section::with_commands(
            "psql_meta",
            "psql Meta-Commands",
            "These are special commands for the psql command-line utility, not SQL commands. \
             They begin with a backslash.",
            vec![
                Command::new("List all databases", "\\l"),
                Command::new("Connect to a database", "\\c my_database"),
                Command::new("List all tables", "\\dt"),
                Command::new("Describe a table", "\\d users"),
                Command::new("List all users", "\\du"),
                Command::new("Quit psql", "\\q"),
            ],
        ),
        Section::with_commands(
            "db_management",
            "Database Management",
            "SQL commands for creating, altering, and dropping databases.",
            vec![
                Command::new("Create a database", "CREATE DATABASE my_database;"),
                Command::new("Drop a database", "DROP DATABASE my_database;"),
            ],
        ),
        Section::with_commands(
            "table_management",
            "Table Management",
            "Commands for managing tables within a database.",
            vec![
                Command::new(
                    "Create a table with data types",
                    "CREATE TABLE users (\n  user_id SERIAL PRIMARY KEY,\n  username VARCHAR(50) UNIQUE NOT NULL,\n  created_at TIMESTAMP WITH TIME ZONE DEFAULT CURRENT_TIMESTAMP\n);",
                ),
                Command::new(
                    "Add a column",
                    "ALTER TABLE users ADD COLUMN email VARCHAR(255);",
                ),
                Command::new("Drop a column", "ALTER TABLE users DROP COLUMN email;"),
                Command::new("Rename a table", "ALTER TABLE users RENAME TO app_users;"),
            ],
        ),
        Section::with_commands(
            "user_management",
            "User & Role Management",
            "Commands for managing database users and their permissions.",
            vec![
                Command::new(
                    "Create a user/role",
                    "CREATE ROLE dave WITH LOGIN PASSWORD 'password123';",
                ),
                Command::new(
                    "Grant privileges on a table",
                    "GRANT SELECT, INSERT, UPDATE ON users TO dave;",
                ),
                Command::new(
                    "Grant all privileges on a database",
                    "GRANT ALL PRIVILEGES ON DATABASE my_database TO dave;",
                ),
                Command::new("Revoke privileges", "REVOKE SELECT ON users FROM dave;"),
            ],
        ),
        Section::with_commands(
            "functions_procedures",
            "Functions & Procedures",
            "Reusable blocks of code that can be executed on demand.",
            vec![
                Command::new(
                    "Create a Function",
                    "CREATE OR REPLACE FUNCTION get_user_count_by_city(city_name VARCHAR)\nRETURNS INT\nLANGUAGE plpgsql\nAS $$\nDECLARE\n    user_count INTEGER;\nBEGIN\n   SELECT COUNT(*) INTO user_count FROM users WHERE city = city_name;\n   RETURN user_count;\nEND;$$;",
                ),
                Command::new(
                    "Call a Function",
                    "SELECT get_user_count_by_city('London');",
                ),
                Command::new(
                    "Create a Procedure",
                    "CREATE OR REPLACE PROCEDURE update_user_age(p_user_id INT, new_age INT)\nLANGUAGE plpgsql\nAS $$\nBEGIN\n    UPDATE users SET age = new_age WHERE user_id = p_user_id;\nEND;$$;",
                ),
                Command::new("Call a Procedure", "CALL update_user_age(1, 31);"),
            ],
        ),
    ])
}
