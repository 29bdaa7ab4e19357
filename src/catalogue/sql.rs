use crate::domain::{Command, Section, Sheet, SubSection};

#[allow(clippy::too_many_lines)]
pub fn sheet() -> Sheet {
    Sheet::new(vec![
        Section::with_commands(
            "dql",
            "Data Query Language (DQL)",
            "DQL commands are used for performing queries on the data within schema objects. The \
             purpose of DQL commands is to get some schema relation based on the query passed to \
             it.",
            vec![
                Command::new("Select all columns", "SELECT * FROM users;"),
                Command::new(
                    "Select specific columns",
                    "SELECT username, email FROM users;",
                ),
                Command::new(
                    "Select with a filter",
                    "SELECT * FROM users WHERE city = 'New York';",
                ),
                Command::new(
                    "Select with ordering",
                    "SELECT * FROM users ORDER BY age DESC;",
                ),
                Command::new("Select distinct values", "SELECT DISTINCT city FROM users;"),
                Command::new("Select with a limit", "SELECT * FROM users LIMIT 5;"),
                Command::new(
                    "Fetch first N rows",
                    "SELECT * FROM users FETCH FIRST 5 ROWS ONLY;",
                ),
            ],
        ),
        Section::with_commands(
            "dml",
            "Data Manipulation Language (DML)",
            "DML commands are used to modify the database. It is responsible for all forms of \
             changes in the database.",
            vec![
                Command::new(
                    "Insert a new row",
                    "INSERT INTO users (username, email, age, city) VALUES ('dave', 'dave@example.com', 42, 'Miami');",
                ),
                Command::new(
                    "Update existing rows",
                    "UPDATE users SET age = 43 WHERE username = 'dave';",
                ),
                Command::new("Delete rows", "DELETE FROM users WHERE username = 'dave';"),
            ],
        ),
        Section::with_commands(
            "ddl",
            "Data Definition Language (DDL)",
            "DDL commands are used to define the database schema. It is a set of SQL commands \
             that can be used to create, modify, and delete database structures but not data.",
            vec![
                Command::new(
                    "Create a new table",
                    "CREATE TABLE products (\n  product_id INT PRIMARY KEY,\n  product_name VARCHAR(255),\n  price DECIMAL(10, 2),\n  seller_id INT\n);",
                ),
                Command::new(
                    "Alter a table (add column)",
                    "ALTER TABLE products ADD stock_quantity INT;",
                ),
                Command::new("Drop a table", "DROP TABLE products;"),
                Command::new(
                    "Create an index",
                    "CREATE INDEX idx_username ON users (username);",
                ),
                Command::new("Drop an index", "DROP INDEX idx_username;"),
            ],
        ),
        Section::with_commands(
            "operators",
            "Operators",
            "Operators are used in the WHERE clause to specify conditions.",
            vec![
                Command::new(
                    "AND Operator",
                    "SELECT * FROM users WHERE age > 25 AND city = 'New York';",
                ),
                Command::new(
                    "OR Operator",
                    "SELECT * FROM users WHERE city = 'London' OR city = 'Paris';",
                ),
                Command::new(
                    "NOT Operator",
                    "SELECT * FROM users WHERE NOT city = 'New York';",
                ),
                Command::new(
                    "LIKE Operator (Pattern Matching)",
                    "SELECT * FROM users WHERE username LIKE 'a%';",
                ),
                Command::new(
                    "BETWEEN Operator",
                    "SELECT * FROM users WHERE age BETWEEN 20 AND 30;",
                ),
                Command::new(
                    "IS NULL Operator",
                    "SELECT * FROM users WHERE email IS NULL;",
                ),
                Command::new(
                    "IN Operator",
                    "SELECT * FROM users WHERE city IN ('London', 'Paris', 'Tokyo');",
                ),
            ],
        ),
        Section::with_commands(
            "joins",
            "JOIN Clauses",
            "JOIN clauses are used to combine rows from two or more tables, based on a related \
             column between them.",
            vec![
                Command::new(
                    "Inner Join",
                    "SELECT u.username, p.product_name FROM users u\nINNER JOIN products p ON u.user_id = p.seller_id;",
                ),
                Command::new(
                    "Left Join",
                    "SELECT u.username, p.product_name FROM users u\nLEFT JOIN products p ON u.user_id = p.seller_id;",
                ),
                Command::new(
                    "Right Join",
                    "SELECT u.username, p.product_name FROM users u\nRIGHT JOIN products p ON u.user_id = p.seller_id;",
                ),
                Command::new(
                    "Full Outer Join",
                    "SELECT u.username, p.product_name FROM users u\nFULL OUTER JOIN products p ON u.user_id = p.seller_id;",
                ),
                Command::new("Cross Join", "SELECT * FROM users\nCROSS JOIN products;"),
            ],
        ),
        Section::with_commands(
            "aggregation",
            "Aggregation & Grouping",
            "Aggregate functions perform a calculation on a set of values and return a single \
             value. They are often used with the GROUP BY clause.",
            vec![
                Command::new("Count rows", "SELECT COUNT(*) FROM users;"),
                Command::new("Sum values", "SELECT SUM(price) FROM products;"),
                Command::new("Average values", "SELECT AVG(age) FROM users;"),
                Command::new(
                    "Find min/max values",
                    "SELECT MIN(price), MAX(price) FROM products;",
                ),
                Command::new(
                    "Group by",
                    "SELECT city, COUNT(*) FROM users GROUP BY city;",
                ),
                Command::new(
                    "Having clause",
                    "SELECT city, COUNT(*) FROM users GROUP BY city HAVING COUNT(*) > 1;",
                ),
            ],
        ),
        Section::with_commands(
            "functions",
            "Functions",
            "SQL functions are used to perform operations on data. They can be used to \
             manipulate strings, numbers, dates, and more.",
            vec![
                Command::new(
                    "Create a Function (Scalar)",
                    "CREATE FUNCTION GetUserFullName(@user_id INT)\nRETURNS VARCHAR(100)\nAS\nBEGIN\n    DECLARE @full_name VARCHAR(100);\n    SELECT @full_name = CONCAT(username, ' (ID: ', user_id, ')') FROM users WHERE user_id = @user_id;\n    RETURN @full_name;\nEND;",
                ),
                Command::new("Call a Scalar Function", "SELECT dbo.GetUserFullName(1);"),
                Command::new("String - UPPER()", "SELECT UPPER(username) FROM users;"),
                Command::new("String - LOWER()", "SELECT LOWER(username) FROM users;"),
                Command::new("String - LENGTH()", "SELECT LENGTH(username) FROM users;"),
                Command::new(
                    "String - CONCAT()",
                    "SELECT CONCAT(username, ' from ', city) FROM users;",
                ),
                Command::new("Numeric - ROUND()", "SELECT ROUND(price) FROM products;"),
                Command::new("Date - NOW()", "SELECT NOW();"),
                Command::new(
                    "Utility - COALESCE()",
                    "SELECT COALESCE(email, 'No email provided') FROM users;",
                ),
            ],
        ),
        Section::with_sub_sections(
            "advanced_queries",
            "Advanced Queries",
            "Advanced SQL features for complex data manipulation and automation.",
            vec![
                SubSection::new(
                    "Window Functions",
                    vec![
                        Command::new(
                            "ROW_NUMBER()",
                            "SELECT username, age, ROW_NUMBER() OVER (ORDER BY age DESC) as row_num FROM users;",
                        ),
                        Command::new(
                            "RANK()",
                            "SELECT username, age, RANK() OVER (ORDER BY age DESC) as rank FROM users;",
                        ),
                        Command::new(
                            "DENSE_RANK()",
                            "SELECT username, age, DENSE_RANK() OVER (ORDER BY age DESC) as dense_rank FROM users;",
                        ),
                        Command::new(
                            "NTILE()",
                            "SELECT username, age, NTILE(4) OVER (ORDER BY age DESC) as quartile FROM users;",
                        ),
                        Command::new(
                            "LAG()",
                            "SELECT username, age, LAG(age, 1) OVER (ORDER BY age) as previous_age FROM users;",
                        ),
                        Command::new(
                            "LEAD()",
                            "SELECT username, age, LEAD(age, 1) OVER (ORDER BY age) as next_age FROM users;",
                        ),
                    ],
                ),
                SubSection::new(
                    "Subqueries",
                    vec![Command::new(
                        "Subquery in WHERE clause",
                        "SELECT username FROM users WHERE user_id IN (SELECT seller_id FROM products WHERE price > 100);",
                    )],
                ),
                SubSection::new(
                    "Stored Procedures",
                    vec![
                        Command::new(
                            "Create Procedure",
                            "CREATE PROCEDURE GetUsersByCity @City NVARCHAR(50)\nAS\nBEGIN\n    SELECT * FROM users WHERE city = @City;\nEND;",
                        ),
                        Command::new("Execute Procedure", "EXEC GetUsersByCity @City = 'London';"),
                    ],
                ),
                SubSection::new(
                    "Triggers",
                    vec![Command::new(
                        "Create Trigger",
                        "CREATE TRIGGER after_user_insert\nAFTER INSERT ON users\nFOR EACH ROW\nBEGIN\n   INSERT INTO user_logs(user_id, action)\n   VALUES(NEW.user_id, 'inserted');\nEND;",
                    )],
                ),
            ],
        ),
        Section::with_commands(
            "transactions",
            "Transactions",
            "Transactions are used to bundle a set of operations into a single execution unit.",
            vec![
                Command::new("Begin Transaction", "BEGIN TRANSACTION;"),
                Command::new("Commit Transaction", "COMMIT;"),
                Command::new("Rollback Transaction", "ROLLBACK;"),
                Command::new(
                    "Transaction with Savepoint",
                    "BEGIN TRANSACTION;\n   UPDATE users SET age = 31 WHERE username = 'alice';\n   SAVEPOINT before_delete;\n   DELETE FROM users WHERE username = 'bob';\n   ROLLBACK TO before_delete;\nCOMMIT;",
                ),
            ],
        ),
    ])
}
