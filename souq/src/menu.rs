//! Interactive console menu
//!
//! Thin role-gated front end over the stores. Every store error is caught
//! here and reported without crashing the session loop; end of input on
//! stdin is a clean shutdown.

use crate::state::App;
use rust_decimal::Decimal;
use shared::models::{ProductUpdate, Role, UserCreate, UserUpdate};
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

pub struct Menu {
    app: App,
}

impl Menu {
    pub fn new(app: App) -> Self {
        Self { app }
    }

    /// Main loop; returns when the user exits or stdin closes
    pub fn run(&mut self) {
        println!("Welcome to the souq console");
        loop {
            if self.app.session.is_logged_in() {
                if self.menu_for_role().is_none() {
                    break;
                }
            } else {
                match self.menu_entry() {
                    Some(true) => continue,
                    Some(false) => {
                        println!("Goodbye.");
                        break;
                    }
                    None => break,
                }
            }
        }
    }

    // =========================================================================
    // Entry and role dispatch
    // =========================================================================

    /// Pre-login menu; `Some(false)` means the user chose to exit
    fn menu_entry(&mut self) -> Option<bool> {
        println!("\n1) Login\n2) Exit");
        match prompt("Choose: ")?.as_str() {
            "1" => {
                self.action_login()?;
                Some(true)
            }
            "2" => Some(false),
            _ => {
                println!("Invalid choice.");
                Some(true)
            }
        }
    }

    fn menu_for_role(&mut self) -> Option<()> {
        let Some(user) = self.app.session.current_user() else {
            return Some(());
        };
        let role = user.usertype;
        println!("\nLogged in as {} ({})", user.username, role);
        match role {
            Role::Admin => self.menu_admin(),
            Role::Employee => self.menu_employee(),
            Role::Customer => self.menu_customer(),
        }
    }

    fn action_login(&mut self) -> Option<()> {
        let username = prompt("Username: ")?;
        let password = prompt("Password: ")?;
        match self.app.session.login(&self.app.users, &username, &password) {
            Ok(user) => println!("Login successful. Welcome {}", user.username),
            Err(e) => println!("Login failed: {e}"),
        }
        Some(())
    }

    // =========================================================================
    // Role menus
    // =========================================================================

    fn menu_admin(&mut self) -> Option<()> {
        loop {
            println!("\n--- Admin Menu ---");
            println!("1) User Management");
            println!("2) Product Management");
            println!("3) Order Management");
            println!("4) Reports");
            println!("5) Logout");
            match prompt("Choose: ")?.as_str() {
                "1" => self.menu_user_management()?,
                "2" => self.menu_product_management()?,
                "3" => self.menu_order_management()?,
                "4" => self.action_reports()?,
                "5" => {
                    self.app.session.logout();
                    return Some(());
                }
                _ => println!("Invalid choice."),
            }
        }
    }

    fn menu_employee(&mut self) -> Option<()> {
        loop {
            println!("\n--- Employee Menu ---");
            println!("1) Product Management");
            println!("2) Order Management");
            println!("3) Logout");
            match prompt("Choose: ")?.as_str() {
                "1" => self.menu_product_management()?,
                "2" => self.menu_order_management()?,
                "3" => {
                    self.app.session.logout();
                    return Some(());
                }
                _ => println!("Invalid choice."),
            }
        }
    }

    fn menu_customer(&mut self) -> Option<()> {
        loop {
            println!("\n--- Customer Menu ---");
            println!("1) View Products");
            println!("2) Create Order");
            println!("3) My Orders");
            println!("4) Logout");
            match prompt("Choose: ")?.as_str() {
                "1" => self.action_list_products()?,
                "2" => self.action_create_order()?,
                "3" => self.action_my_orders()?,
                "4" => {
                    self.app.session.logout();
                    return Some(());
                }
                _ => println!("Invalid choice."),
            }
        }
    }

    // =========================================================================
    // User management (admin only)
    // =========================================================================

    fn menu_user_management(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Admin]) {
            println!("Error: {e}");
            return Some(());
        }
        loop {
            println!("\n--- User Management ---");
            println!("1) Add User");
            println!("2) Update User");
            println!("3) Delete User");
            println!("4) List Users");
            println!("5) Activate User");
            println!("6) Deactivate User");
            println!("7) Back");
            match prompt("Choose: ")?.as_str() {
                "1" => self.action_add_user()?,
                "2" => self.action_update_user()?,
                "3" => self.action_delete_user()?,
                "4" => self.action_list_users(),
                "5" => self.action_set_user_active(true)?,
                "6" => self.action_set_user_active(false)?,
                "7" => return Some(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    fn action_add_user(&mut self) -> Option<()> {
        println!("\n--- Add User ---");
        let data = UserCreate {
            username: prompt("Username: ")?,
            password: prompt("Password: ")?,
            usertype: prompt("User type (admin/employee/customer): ")?,
            phonenumber: prompt("Phone number: ")?,
            gender: prompt("Gender (m/f): ")?,
        };
        match self.app.users.add_user(data) {
            Ok(user) => println!("User '{}' added successfully.", user.username),
            Err(e) => println!("Failed to add user: {e}"),
        }
        Some(())
    }

    fn action_update_user(&mut self) -> Option<()> {
        println!("\n--- Update User ---");
        let username = prompt("Username to update: ")?;
        let Some(user) = self.app.users.find_user(&username) else {
            println!("User not found");
            return Some(());
        };
        println!("Leave blank to keep current value.");
        let new_username = prompt_or(&format!("New username [{}]: ", user.username))?;
        let new_password = prompt_or("New password (leave blank to keep): ")?;
        let new_usertype = prompt_or(&format!("New usertype [{}]: ", user.usertype))?;
        let new_phone = prompt_or(&format!("New phone [{}]: ", user.phonenumber))?;
        let new_gender = prompt_or(&format!("New gender [{}]: ", user.gender))?;

        let patch = UserUpdate {
            username: new_username,
            password: new_password,
            usertype: new_usertype,
            phonenumber: new_phone,
            gender: new_gender,
            isactive: None,
        };
        match self.app.users.update_user(&username, &patch) {
            Ok(_) => println!("User updated."),
            Err(e) => println!("Failed to update user: {e}"),
        }
        Some(())
    }

    fn action_delete_user(&mut self) -> Option<()> {
        println!("\n--- Delete User ---");
        let username = prompt("Username to delete: ")?;
        match self.app.users.delete_user(&username) {
            Ok(()) => println!("User deleted."),
            Err(e) => println!("Error: {e}"),
        }
        Some(())
    }

    fn action_list_users(&self) {
        println!("\n--- All Users ---");
        let users = self.app.users.list_users();
        if users.is_empty() {
            println!("No users found.");
            return;
        }
        for user in users {
            println!("- {user}");
        }
    }

    fn action_set_user_active(&mut self, active: bool) -> Option<()> {
        let verb = if active { "activate" } else { "deactivate" };
        let username = prompt(&format!("Username to {verb}: "))?;
        let result = if active {
            self.app.users.activate_user(&username)
        } else {
            self.app.users.deactivate_user(&username)
        };
        match result {
            Ok(()) => println!("User {verb}d."),
            Err(e) => println!("Error: {e}"),
        }
        Some(())
    }

    // =========================================================================
    // Product management (admin and employee)
    // =========================================================================

    fn menu_product_management(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Admin, Role::Employee]) {
            println!("Error: {e}");
            return Some(());
        }
        loop {
            println!("\n--- Product Management ---");
            println!("1) Add Product");
            println!("2) Update Product");
            println!("3) Delete(Archive) Product");
            println!("4) List Products");
            println!("5) Back");
            match prompt("Choose: ")?.as_str() {
                "1" => self.action_add_product()?,
                "2" => self.action_update_product()?,
                "3" => self.action_archive_product()?,
                "4" => self.action_list_products()?,
                "5" => return Some(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    fn action_add_product(&mut self) -> Option<()> {
        println!("\n--- Add Product ---");
        let name = prompt("Product name: ")?;
        let price = prompt_decimal("Product price: ")?;
        match self.app.catalog.add_product(&name, price) {
            Ok(product) => println!("Product added: {product}"),
            Err(e) => println!("Failed to add product: {e}"),
        }
        Some(())
    }

    fn action_update_product(&mut self) -> Option<()> {
        println!("\n--- Update Product ---");
        let id = prompt_i64("Product ID to update: ")?;
        let Some(product) = self.app.catalog.find_product(id) else {
            println!("Product not found.");
            return Some(());
        };
        println!("Leave blank to keep current value.");
        let new_name = prompt_or(&format!("New name [{}]: ", product.name))?;
        let new_price = prompt_decimal_or(&format!("New price [{}]: ", product.price))?;

        let patch = ProductUpdate {
            name: new_name,
            price: new_price,
            is_active: None,
        };
        match self.app.catalog.update_product(id, &patch) {
            Ok(updated) => println!("Product updated: {updated}"),
            Err(e) => println!("Failed to update product: {e}"),
        }
        Some(())
    }

    fn action_archive_product(&mut self) -> Option<()> {
        println!("\n--- Delete(Archive) Product ---");
        let id = prompt_i64("Product ID to delete/archive: ")?;
        match self.app.catalog.delete_product(id, true) {
            Ok(()) => println!("Product archived (is_active=false)."),
            Err(e) => println!("Error: {e}"),
        }
        Some(())
    }

    fn action_list_products(&mut self) -> Option<()> {
        println!("\n--- Products ---");
        let products = self.app.catalog.list_products(false);
        if products.is_empty() {
            println!("No active products.");
            return Some(());
        }
        for product in products {
            println!("- {product}");
        }
        Some(())
    }

    // =========================================================================
    // Order management (admin and employee)
    // =========================================================================

    fn menu_order_management(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Admin, Role::Employee]) {
            println!("Error: {e}");
            return Some(());
        }
        loop {
            println!("\n--- Order Management ---");
            println!("1) List Orders");
            println!("2) Update Order Status");
            println!("3) View Order Details");
            println!("4) Back");
            match prompt("Choose: ")?.as_str() {
                "1" => self.action_list_orders(),
                "2" => self.action_update_order_status()?,
                "3" => self.action_view_order_details()?,
                "4" => return Some(()),
                _ => println!("Invalid choice."),
            }
        }
    }

    fn action_list_orders(&self) {
        let orders = self.app.orders.list_orders();
        if orders.is_empty() {
            println!("No orders found.");
            return;
        }
        for order in orders {
            println!("- {order}");
        }
    }

    fn action_update_order_status(&mut self) -> Option<()> {
        let order_id = prompt_i64("Order ID: ")?;
        let new_status =
            prompt("New status (pending/confirmed/shipped/delivered/cancelled): ")?;
        match self.app.orders.update_order_status(order_id, &new_status) {
            Ok(order) => println!("Order updated: {order}"),
            Err(e) => println!("Error: {e}"),
        }
        Some(())
    }

    fn action_view_order_details(&mut self) -> Option<()> {
        let order_id = prompt_i64("Order ID: ")?;
        let Some(order) = self.app.orders.find_order(order_id) else {
            println!("Order not found.");
            return Some(());
        };
        println!("{order}");
        for item in &order.items {
            println!("  - {item}");
        }
        println!("Total: {}", order.calculate_total());
        Some(())
    }

    // =========================================================================
    // Customer actions
    // =========================================================================

    fn action_create_order(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Customer]) {
            println!("Error: {e}");
            return Some(());
        }
        let Some(username) = self.app.session.current_user().map(|u| u.username.clone()) else {
            return Some(());
        };

        println!("\n--- Create Order ---");
        println!("Enter product id and quantity. Type 'done' when finished.");
        let mut items: Vec<(i64, i64)> = Vec::new();
        loop {
            let raw = prompt("Product ID (or 'done'): ")?;
            if raw.eq_ignore_ascii_case("done") {
                break;
            }
            let Ok(product_id) = raw.parse::<i64>() else {
                println!("Enter a valid integer product id.");
                continue;
            };
            let quantity = prompt_i64("Quantity: ")?;
            items.push((product_id, quantity));
        }

        match self
            .app
            .orders
            .create_order(&username, &items, &self.app.catalog)
        {
            Ok(order) => {
                println!("Order created with ID: {}", order.order_id);
                println!("Order total: {}", order.calculate_total());
            }
            Err(e) => println!("Failed to create order: {e}"),
        }
        Some(())
    }

    fn action_my_orders(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Customer]) {
            println!("Error: {e}");
            return Some(());
        }
        let Some(username) = self.app.session.current_user().map(|u| u.username.clone()) else {
            return Some(());
        };
        let orders = self.app.orders.list_user_orders(&username);
        if orders.is_empty() {
            println!("You have no orders.");
            return Some(());
        }
        for order in orders {
            println!("- {order}");
            for item in &order.items {
                println!("   - {item}");
            }
            println!("   Total: {}", order.calculate_total());
        }
        Some(())
    }

    // =========================================================================
    // Reports (admin only)
    // =========================================================================

    fn action_reports(&mut self) -> Option<()> {
        if let Err(e) = self.app.session.require_role(&[Role::Admin]) {
            println!("Error: {e}");
            return Some(());
        }
        println!("\n--- Reports ---");
        let users = self.app.users.list_users();
        let products = self.app.catalog.list_products(true);
        let orders = self.app.orders.list_orders();

        println!("Total users: {}", users.len());
        println!("Total products (including archived): {}", products.len());
        println!("Total orders: {}", orders.len());

        let mut by_role: HashMap<Role, usize> = HashMap::new();
        for user in &users {
            *by_role.entry(user.usertype).or_default() += 1;
        }
        let mut by_role: Vec<_> = by_role.into_iter().collect();
        by_role.sort_by_key(|(role, _)| role.as_str());
        for (role, count) in by_role {
            println!("  {role}: {count}");
        }

        let revenue: Decimal = orders.iter().map(|o| o.calculate_total()).sum();
        println!("Total revenue (sum of orders): {revenue}");
        Some(())
    }
}

// =============================================================================
// Prompt helpers
// =============================================================================

/// Read one trimmed line; `None` means stdin reached end of input
fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Like [`prompt`], but an empty answer becomes `None`-as-unset
fn prompt_or(text: &str) -> Option<Option<String>> {
    let raw = prompt(text)?;
    Some(if raw.is_empty() { None } else { Some(raw) })
}

/// Re-prompt until a valid integer is entered
fn prompt_i64(text: &str) -> Option<i64> {
    loop {
        let raw = prompt(text)?;
        match raw.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a valid integer."),
        }
    }
}

/// Re-prompt until a valid number is entered
fn prompt_decimal(text: &str) -> Option<Decimal> {
    loop {
        let raw = prompt(text)?;
        match raw.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}

/// Like [`prompt_decimal`], but an empty answer becomes `None`-as-unset
fn prompt_decimal_or(text: &str) -> Option<Option<Decimal>> {
    loop {
        let raw = prompt(text)?;
        if raw.is_empty() {
            return Some(None);
        }
        match raw.parse() {
            Ok(value) => return Some(Some(value)),
            Err(_) => println!("Please enter a valid number."),
        }
    }
}
