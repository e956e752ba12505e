/// One entry in the fixed deploy-time seed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedShoppie {
    pub id: &'static str,
    pub owner: &'static str,
    pub name: &'static str,
    pub transaction: &'static str,
}

/// The four starter records written at deployment, in order.
///
/// All start owned by Coles at a zero transaction value; ownership and
/// value change through later `write` invocations.
pub const SEED_SHOPPIES: [SeedShoppie; 4] = [
    SeedShoppie {
        id: "1",
        owner: "Coles",
        name: "Lipton Black Tea",
        transaction: "0.00",
    },
    SeedShoppie {
        id: "2",
        owner: "Coles",
        name: "Huggies Nappies",
        transaction: "0.00",
    },
    SeedShoppie {
        id: "3",
        owner: "Coles",
        name: "Weet-Bix Family Pack",
        transaction: "0.00",
    },
    SeedShoppie {
        id: "4",
        owner: "Coles",
        name: "Sun Bites Snack Crackers",
        transaction: "0.00",
    },
];
