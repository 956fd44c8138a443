//! Canned marketplace data shown by the admin pages until a backend exists.

use shared_types::{Order, Product, User, UserAccount, UserRole};

fn product(id: &str, name: &str, seller: &str, price_cents: i64, currency: &str, status: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        seller: seller.to_string(),
        price_cents,
        currency: currency.to_string(),
        status: status.to_string(),
    }
}

fn order(
    id: &str,
    customer: &str,
    total_cents: i64,
    currency: &str,
    status: &str,
    placed_at: &str,
) -> Order {
    Order {
        id: id.to_string(),
        customer: customer.to_string(),
        total_cents,
        currency: currency.to_string(),
        status: status.to_string(),
        placed_at: placed_at.to_string(),
    }
}

fn account(user: User, status: &str, joined_at: &str) -> UserAccount {
    UserAccount {
        user,
        status: status.to_string(),
        joined_at: joined_at.to_string(),
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product("p-1001", "Handmade Ceramic Mug", "Clay & Co", 2999, "USD", "active"),
        product("p-1002", "Linen Tote Bag", "Atelier Nord", 3450, "EUR", "active"),
        product("p-1003", "Brass Desk Lamp", "Lumen Works", 12900, "GBP", "pending_review"),
        product("p-1004", "Block-Print Cushion Cover", "Jaipur Looms", 149900, "INR", "active"),
        product("p-1005", "Cast Iron Teapot", "Kettle House", 8800, "JPY", "out_of_stock"),
        product("p-1006", "Maple Cutting Board", "Northern Grain", 5500, "CAD", "draft"),
        product("p-1007", "Merino Beanie", "Southern Knits", 4200, "AUD", "flagged"),
        product("p-1008", "Swiss Pocket Watch", "Uhrwerk", 123456, "CHF", "active"),
        product("p-1009", "Leather Sandals", "Couro Vivo", 18990, "BRL", "archived"),
        product("p-1010", "Beeswax Candle Set", "Clay & Co", 1800, "USD", "low_stock"),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        order("o-5001", "Maria Lopez", 5998, "USD", "completed", "2026-09-18T10:12:00Z"),
        order("o-5002", "Jonas Becker", 3450, "EUR", "shipped", "2026-09-19T08:40:00Z"),
        order("o-5003", "Priya Nair", 149900, "INR", "processing", "2026-09-19T16:05:00Z"),
        order("o-5004", "Oliver Hughes", 12900, "GBP", "cancelled", "2026-09-20T09:30:00Z"),
        order("o-5005", "Ana Souza", 18990, "BRL", "refunded", "2026-09-20T21:35:00Z"),
        order("o-5006", "Liam Carter", 1800, "USD", "pending", "2026-09-21T07:55:00Z"),
    ]
}

pub fn accounts() -> Vec<UserAccount> {
    let mut extra_seller = User::mock(UserRole::Seller);
    extra_seller.id = "4".to_string();
    extra_seller.email = "lumen@marketplace.com".to_string();
    extra_seller.name = "Lumen Works".to_string();

    let mut extra_buyer = User::mock(UserRole::Buyer);
    extra_buyer.id = "5".to_string();
    extra_buyer.email = "spam.account@marketplace.com".to_string();
    extra_buyer.name = "Spam Account".to_string();

    vec![
        account(User::mock(UserRole::Admin), "active", "2025-11-02T09:00:00Z"),
        account(User::mock(UserRole::Seller), "verified", "2026-01-14T12:30:00Z"),
        account(User::mock(UserRole::Buyer), "active", "2026-03-08T18:45:00Z"),
        account(extra_seller, "pending", "2026-09-01T11:20:00Z"),
        account(extra_buyer, "banned", "2026-06-22T04:10:00Z"),
    ]
}
