/// Menu entries, numbered as the user types them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Exit = 0,
    AddClient = 1,
    AddProduct = 2,
    ViewClients = 3,
    ViewProducts = 4,
    AddToWishlist = 5,
    PlaceOrder = 6,
    ReceivePayment = 7,
    ReceiveShipment = 8,
    ViewInvoices = 9,
    Save = 10,
    Retrieve = 11,
    Help = 12,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 13] = [
        MenuCommand::Exit,
        MenuCommand::AddClient,
        MenuCommand::AddProduct,
        MenuCommand::ViewClients,
        MenuCommand::ViewProducts,
        MenuCommand::AddToWishlist,
        MenuCommand::PlaceOrder,
        MenuCommand::ReceivePayment,
        MenuCommand::ReceiveShipment,
        MenuCommand::ViewInvoices,
        MenuCommand::Save,
        MenuCommand::Retrieve,
        MenuCommand::Help,
    ];

    pub fn number(self) -> i64 {
        self as i64
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuCommand::Exit => "to Exit",
            MenuCommand::AddClient => "to add a client",
            MenuCommand::AddProduct => "to add a product",
            MenuCommand::ViewClients => "to view all clients",
            MenuCommand::ViewProducts => "to view all products",
            MenuCommand::AddToWishlist => "to add products to a client's wishlist",
            MenuCommand::PlaceOrder => "to place an order for a client",
            MenuCommand::ReceivePayment => "to record a payment for a client",
            MenuCommand::ReceiveShipment => "to receive a product shipment",
            MenuCommand::ViewInvoices => "to view all invoices for a client",
            MenuCommand::Save => "to save data",
            MenuCommand::Retrieve => "to retrieve data",
            MenuCommand::Help => "for help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCommand(pub i64);

impl TryFrom<i64> for MenuCommand {
    type Error = UnknownCommand;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuCommand::ALL
            .iter()
            .copied()
            .find(|c| c.number() == value)
            .ok_or(UnknownCommand(value))
    }
}
