#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blockchain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
}

impl Blockchain {
    pub const ALL: [Blockchain; 5] = [
        Blockchain::Osmosis,
        Blockchain::Ethereum,
        Blockchain::Arbitrum,
        Blockchain::Zilliqa,
        Blockchain::Neo,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Osmosis" => Some(Blockchain::Osmosis),
            "Ethereum" => Some(Blockchain::Ethereum),
            "Arbitrum" => Some(Blockchain::Arbitrum),
            "Zilliqa" => Some(Blockchain::Zilliqa),
            "Neo" => Some(Blockchain::Neo),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Blockchain::Osmosis => "Osmosis",
            Blockchain::Ethereum => "Ethereum",
            Blockchain::Arbitrum => "Arbitrum",
            Blockchain::Zilliqa => "Zilliqa",
            Blockchain::Neo => "Neo",
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            Blockchain::Osmosis => Priority(100),
            Blockchain::Ethereum => Priority(50),
            Blockchain::Arbitrum => Priority(30),
            Blockchain::Zilliqa | Blockchain::Neo => Priority(20),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    pub const LOWEST: Priority = Priority(-99);

    pub fn is_lowest(&self) -> bool {
        *self <= Self::LOWEST
    }
}

pub fn priority_of(blockchain: &str) -> Priority {
    Blockchain::from_name(blockchain)
        .map(|chain| chain.priority())
        .unwrap_or(Priority::LOWEST)
}

#[cfg(test)]
mod tests {
    use crate::pipeline_utils::priority::{priority_of, Blockchain, Priority};

    #[test]
    fn known_chains_are_ranked() {
        assert_eq!(priority_of("Osmosis"), Priority(100));
        assert_eq!(priority_of("Ethereum"), Priority(50));
        assert_eq!(priority_of("Arbitrum"), Priority(30));
        assert_eq!(priority_of("Zilliqa"), Priority(20));
        assert_eq!(priority_of("Neo"), Priority(20));
    }

    #[test]
    fn unknown_chains_get_lowest() {
        for name in ["", "Unknown", "osmosis", "ETHEREUM", " Neo"] {
            assert_eq!(priority_of(name), Priority::LOWEST, "{:?}", name);
            assert!(priority_of(name).is_lowest());
        }
    }

    #[test]
    fn lowest_is_below_every_known_chain() {
        for chain in Blockchain::ALL {
            assert!(chain.priority() > Priority::LOWEST, "{:?}", chain);
            assert!(!chain.priority().is_lowest());
        }
    }

    #[test]
    fn names_round_trip() {
        for chain in Blockchain::ALL {
            assert_eq!(Blockchain::from_name(chain.name()), Some(chain));
        }
    }

    #[test]
    fn precedence_order() {
        let ranks = Blockchain::ALL
            .iter()
            .map(|chain| chain.priority())
            .collect::<Vec<_>>();
        assert!(ranks.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
