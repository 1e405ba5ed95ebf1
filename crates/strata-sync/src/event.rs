use strata_blocks::{BlockState, ItemId};
use strata_geom::Location;
use strata_world::{AgentId, EntityId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickAction {
    LeftClick,
    RightClick,
}

/// Host notifications the engine reconciles. Each variant maps to exactly one rule.
#[derive(Clone, Debug, PartialEq)]
pub enum SyncEvent {
    // Blocks
    BlockBroken { at: Location },
    BlockPlaced { at: Location, state: BlockState },
    PistonExtended { at: Location },

    // Liquids
    LiquidFilled { at: Location },
    LiquidDrained { at: Location },

    // Signs; `lines` are the text being committed, not yet stored in the world
    SignEdited { at: Location, lines: Vec<String> },

    // Containers
    ContainerInteract {
        at: Location,
        agent: AgentId,
        action: ClickAction,
        sneaking: bool,
        main_hand: Option<ItemId>,
    },
    ItemCollected { inventory: Location, entity: EntityId },
}

impl SyncEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            SyncEvent::BlockBroken { .. } => "BlockBroken",
            SyncEvent::BlockPlaced { .. } => "BlockPlaced",
            SyncEvent::PistonExtended { .. } => "PistonExtended",
            SyncEvent::LiquidFilled { .. } => "LiquidFilled",
            SyncEvent::LiquidDrained { .. } => "LiquidDrained",
            SyncEvent::SignEdited { .. } => "SignEdited",
            SyncEvent::ContainerInteract { .. } => "ContainerInteract",
            SyncEvent::ItemCollected { .. } => "ItemCollected",
        }
    }

    /// Block the event happened at.
    pub fn location(&self) -> Location {
        match self {
            SyncEvent::BlockBroken { at }
            | SyncEvent::BlockPlaced { at, .. }
            | SyncEvent::PistonExtended { at }
            | SyncEvent::LiquidFilled { at }
            | SyncEvent::LiquidDrained { at }
            | SyncEvent::SignEdited { at, .. }
            | SyncEvent::ContainerInteract { at, .. } => *at,
            SyncEvent::ItemCollected { inventory, .. } => *inventory,
        }
    }

    /// Events that are dropped when the host cancelled them before delivery.
    pub fn skips_cancelled(&self) -> bool {
        matches!(
            self,
            SyncEvent::BlockBroken { .. } | SyncEvent::BlockPlaced { .. } | SyncEvent::SignEdited { .. }
        )
    }
}

/// One event as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub seq: u64,
    pub cancelled: bool,
    pub event: SyncEvent,
}

impl Delivery {
    pub fn new(seq: u64, event: SyncEvent) -> Self {
        Self {
            seq,
            cancelled: false,
            event,
        }
    }
}
