/// Stand-in customer records shown on the admin page. Display-only; there
/// is no customer table behind them.
#[derive(Clone, Debug)]
pub(crate) struct Customer {
    pub(crate) id: i32,
    pub(crate) name: &'static str,
    pub(crate) email: &'static str,
    pub(crate) phone: &'static str,
}

pub(crate) const CUSTOMERS: [Customer; 3] = [
    Customer {
        id: 1,
        name: "John Doe",
        email: "john@example.com",
        phone: "123-456-7890",
    },
    Customer {
        id: 2,
        name: "Jane Smith",
        email: "jane@example.com",
        phone: "987-654-3210",
    },
    Customer {
        id: 3,
        name: "Alice Johnson",
        email: "alice@example.com",
        phone: "555-555-5555",
    },
];
