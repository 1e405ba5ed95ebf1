//! Scripted scenarios: locks, initial blocks, loose items and a list of host events.
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use strata_blocks::{BlockRegistry, BlockState, SignText};
use strata_geom::{Location, Vec3};
use strata_sections::SectionRegistry;
use strata_sync::{ClickAction, Delivery, SyncEvent};
use strata_world::{AgentId, EntityId, LockGroup, MemoryLocks, MemoryWorld, World};

#[derive(Deserialize, Debug, Clone)]
pub struct LocDef {
    pub section: String,
    pub pos: [i32; 3],
}

#[derive(Deserialize, Debug, Clone)]
pub struct StackDef {
    pub item: String,
    pub count: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LockDef {
    pub signs: Vec<LocDef>,
    #[serde(default)]
    pub protects: Vec<LocDef>,
    #[serde(default)]
    pub allowed: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SetupDef {
    pub at: LocDef,
    pub block: String,
    #[serde(default)]
    pub items: Vec<StackDef>,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub waterlogged: Option<bool>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DropDef {
    pub name: String,
    pub at: LocDef,
    pub item: String,
    pub count: u32,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionDef {
    LeftClick,
    #[default]
    RightClick,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EventDef {
    BlockBroken {
        at: LocDef,
    },
    BlockPlaced {
        at: LocDef,
        block: String,
        #[serde(default)]
        items: Vec<StackDef>,
        #[serde(default)]
        lines: Vec<String>,
    },
    PistonExtended {
        at: LocDef,
    },
    LiquidFilled {
        at: LocDef,
    },
    LiquidDrained {
        at: LocDef,
    },
    SignEdited {
        at: LocDef,
        lines: Vec<String>,
    },
    ContainerInteract {
        at: LocDef,
        agent: String,
        #[serde(default)]
        action: ActionDef,
        #[serde(default)]
        sneaking: bool,
        #[serde(default)]
        main_hand: Option<String>,
    },
    ItemCollected {
        inventory: LocDef,
        entity: String,
    },
}

#[derive(Deserialize, Debug, Clone)]
pub struct EventEntry {
    #[serde(default)]
    pub cancelled: bool,
    #[serde(flatten)]
    pub event: EventDef,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Script {
    #[serde(default, rename = "lock")]
    pub locks: Vec<LockDef>,
    #[serde(default)]
    pub setup: Vec<SetupDef>,
    #[serde(default, rename = "drop")]
    pub drops: Vec<DropDef>,
    #[serde(default, rename = "event")]
    pub events: Vec<EventEntry>,
}

impl Script {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }
}

/// A script resolved against the loaded registries, ready to replay.
pub struct Scenario {
    pub world: MemoryWorld,
    pub locks: MemoryLocks,
    pub deliveries: Vec<Delivery>,
}

struct Resolver<'a> {
    sections: &'a SectionRegistry,
    blocks: &'a BlockRegistry,
    entities: HashMap<String, EntityId>,
}

impl Resolver<'_> {
    fn loc(&self, def: &LocDef) -> Result<Location, Box<dyn Error>> {
        let section = self
            .sections
            .id_by_name(&def.section)
            .ok_or_else(|| format!("unknown section `{}`", def.section))?;
        let [x, y, z] = def.pos;
        Ok(Location::at(section, x, y, z))
    }

    fn state(
        &self,
        block: &str,
        items: &[StackDef],
        lines: &[String],
        waterlogged: Option<bool>,
    ) -> Result<BlockState, Box<dyn Error>> {
        let mut state = self
            .blocks
            .state_by_name(block)
            .ok_or_else(|| format!("unknown block `{}`", block))?;
        if !items.is_empty() {
            let inv = state
                .inventory_mut()
                .ok_or_else(|| format!("`{}` cannot hold items", block))?;
            for def in items {
                let stack = self
                    .blocks
                    .stack(&def.item, def.count)
                    .ok_or_else(|| format!("unknown item `{}`", def.item))?;
                if inv.add_stack(stack).is_some() {
                    return Err(format!("items do not fit in `{}`", block).into());
                }
            }
        }
        if !lines.is_empty() {
            let text = state
                .sign_text_mut()
                .ok_or_else(|| format!("`{}` is not a sign", block))?;
            *text = SignText::from_lines(lines.iter().cloned());
        }
        if let Some(flag) = waterlogged {
            if !state.set_waterlogged(flag) {
                return Err(format!("`{}` cannot be waterlogged", block).into());
            }
        }
        Ok(state)
    }

    fn event(&self, def: &EventDef) -> Result<SyncEvent, Box<dyn Error>> {
        Ok(match def {
            EventDef::BlockBroken { at } => SyncEvent::BlockBroken { at: self.loc(at)? },
            EventDef::BlockPlaced {
                at,
                block,
                items,
                lines,
            } => SyncEvent::BlockPlaced {
                at: self.loc(at)?,
                state: self.state(block, items, lines, None)?,
            },
            EventDef::PistonExtended { at } => SyncEvent::PistonExtended { at: self.loc(at)? },
            EventDef::LiquidFilled { at } => SyncEvent::LiquidFilled { at: self.loc(at)? },
            EventDef::LiquidDrained { at } => SyncEvent::LiquidDrained { at: self.loc(at)? },
            EventDef::SignEdited { at, lines } => SyncEvent::SignEdited {
                at: self.loc(at)?,
                lines: lines.clone(),
            },
            EventDef::ContainerInteract {
                at,
                agent,
                action,
                sneaking,
                main_hand,
            } => SyncEvent::ContainerInteract {
                at: self.loc(at)?,
                agent: AgentId::new(agent.as_str()),
                action: match action {
                    ActionDef::LeftClick => ClickAction::LeftClick,
                    ActionDef::RightClick => ClickAction::RightClick,
                },
                sneaking: *sneaking,
                main_hand: match main_hand {
                    Some(name) => Some(
                        self.blocks
                            .item_id_by_name(name)
                            .ok_or_else(|| format!("unknown item `{}`", name))?,
                    ),
                    None => None,
                },
            },
            EventDef::ItemCollected { inventory, entity } => SyncEvent::ItemCollected {
                inventory: self.loc(inventory)?,
                entity: *self
                    .entities
                    .get(entity)
                    .ok_or_else(|| format!("unknown item entity `{}`", entity))?,
            },
        })
    }
}

impl Scenario {
    pub fn build(
        script: &Script,
        sections: &SectionRegistry,
        blocks: &BlockRegistry,
    ) -> Result<Self, Box<dyn Error>> {
        let mut resolver = Resolver {
            sections,
            blocks,
            entities: HashMap::new(),
        };

        let mut locks = MemoryLocks::new();
        for def in &script.locks {
            let signs = def
                .signs
                .iter()
                .map(|l| resolver.loc(l))
                .collect::<Result<Vec<_>, _>>()?;
            let protects = def
                .protects
                .iter()
                .map(|l| resolver.loc(l))
                .collect::<Result<Vec<_>, _>>()?;
            locks.add_group(LockGroup {
                signs,
                protects,
                allowed: def.allowed.iter().map(|a| AgentId::new(a.as_str())).collect(),
            });
        }

        let mut world = MemoryWorld::default();
        for def in &script.setup {
            let at = resolver.loc(&def.at)?;
            let state = resolver.state(&def.block, &def.items, &def.lines, def.waterlogged)?;
            world.set_block(at, state);
        }
        for def in &script.drops {
            let at = resolver.loc(&def.at)?;
            let stack = blocks
                .stack(&def.item, def.count)
                .ok_or_else(|| format!("unknown item `{}`", def.item))?;
            let id = world.spawn_item(at.point(Vec3::new(0.5, 0.0, 0.5)), stack);
            if resolver.entities.insert(def.name.clone(), id).is_some() {
                return Err(format!("duplicate item entity `{}`", def.name).into());
            }
        }

        let mut deliveries = Vec::with_capacity(script.events.len());
        for (i, entry) in script.events.iter().enumerate() {
            let mut delivery = Delivery::new(i as u64 + 1, resolver.event(&entry.event)?);
            delivery.cancelled = entry.cancelled;
            deliveries.push(delivery);
        }
        Ok(Scenario {
            world,
            locks,
            deliveries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registries() -> (SectionRegistry, BlockRegistry) {
        (
            SectionRegistry::from_toml_str(include_str!("../config/sections.toml")).unwrap(),
            BlockRegistry::from_toml_str(include_str!("../config/blocks.toml")).unwrap(),
        )
    }

    #[test]
    fn demo_script_resolves() {
        let (sections, blocks) = registries();
        let script = Script::from_toml_str(include_str!("../demos/overlap.toml")).unwrap();
        let scenario = Scenario::build(&script, &sections, &blocks).unwrap();
        assert_eq!(scenario.locks.len(), 1);
        assert_eq!(scenario.deliveries.len(), script.events.len());
        assert!(scenario.deliveries.last().unwrap().cancelled);
        assert_eq!(scenario.world.entities().len(), 1);
        let chest = scenario.world.block(Location::at(sections.id_by_name("lower").unwrap(), 2, 10, 2));
        assert_eq!(chest.inventory().unwrap().total_items(), 3);
    }

    #[test]
    fn unknown_names_are_reported() {
        let (sections, blocks) = registries();
        for bad in [
            "[[setup]]\nat = { section = \"middle\", pos = [0, 0, 0] }\nblock = \"stone\"\n",
            "[[setup]]\nat = { section = \"upper\", pos = [0, 70, 0] }\nblock = \"marble\"\n",
            "[[setup]]\nat = { section = \"upper\", pos = [0, 70, 0] }\nblock = \"stone\"\nlines = [\"hi\"]\n",
            "[[event]]\nkind = \"item_collected\"\ninventory = { section = \"upper\", pos = [0, 70, 0] }\nentity = \"ghost\"\n",
        ] {
            let script = Script::from_toml_str(bad).unwrap();
            assert!(Scenario::build(&script, &sections, &blocks).is_err(), "{}", bad);
        }
    }

    #[test]
    fn event_kinds_parse() {
        let script = Script::from_toml_str(
            r#"
            [[event]]
            kind = "container_interact"
            at = { section = "lower", pos = [1, 2, 3] }
            agent = "alice"
            sneaking = true
            main_hand = "oak_sign"

            [[event]]
            kind = "liquid_drained"
            at = { section = "upper", pos = [1, 62, 3] }
            cancelled = true
        "#,
        )
        .unwrap();
        assert_eq!(script.events.len(), 2);
        assert!(matches!(
            script.events[0].event,
            EventDef::ContainerInteract {
                sneaking: true,
                action: ActionDef::RightClick,
                ..
            }
        ));
        assert!(script.events[1].cancelled);
    }
}
