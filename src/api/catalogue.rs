use crate::api::models::{ Coffee, CoffeeSize, VipOrder };

pub fn coffee_catalogue() -> Vec<Coffee> {
    vec![
        Coffee::new(1, "Black Coffee", CoffeeSize::Medium),
        Coffee::new(2, "Latte", CoffeeSize::Large),
        Coffee::new(3, "Caramel Latte", CoffeeSize::Large),
        Coffee::new(4, "Cappuccino", CoffeeSize::Medium),
        Coffee::new(5, "Espresso", CoffeeSize::Small),
        Coffee::new(6, "Macchiato", CoffeeSize::Small),
        Coffee::new(7, "Mocha", CoffeeSize::Large),
        Coffee::new(8, "Hot Chocolate", CoffeeSize::Medium),
        Coffee::new(9, "Chai Latte", CoffeeSize::Large),
        Coffee::new(10, "Matcha Latte", CoffeeSize::Large)
    ]
}

pub fn vip_orders() -> Vec<VipOrder> {
    vec![
        vip_order(101, "Elon M.", 5, "Small", 2, "Extra strong, no sugar"),
        vip_order(102, "Beyoncé", 3, "Large", 1, "Oat milk, extra caramel"),
        vip_order(103, "Bill G.", 7, "Large", 1, "No whipped cream"),
        vip_order(104, "Taylor S", 9, "Large", 2, "Coconut milk, extra cinnamon"),
        vip_order(105, "Shelian Gladis", 1, "Medium", 3, "Black, no sugar")
    ]
}

fn vip_order(order_id: u32, customer: &str, coffee_id: u32, size: &str, quantity: u32, special_request: &str) -> VipOrder {
    VipOrder {
        order_id,
        customer: customer.to_string(),
        coffee_id,
        size: size.to_string(),
        quantity,
        special_request: special_request.to_string()
    }
}
