// ── Message generation ──
//
// Maps each CBSD's desired state, actual state and liveness onto the
// actions that move it toward compliance. Rules are evaluated strictly
// in table order and the first matching guard wins.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::action::Action;
use crate::config::GeneratorConfig;
use crate::eirp::{self, FULL_BAND};
use crate::model::{ActiveModeConfig, Cbsd, CbsdState, FrequencyRange, GrantState, State};
use crate::sas::{OPERATION_STATE_GRANTED, Request};

/// Everything a rule may look at for one CBSD.
struct Facts<'a> {
    desired: CbsdState,
    cbsd: &'a Cbsd,
    active: bool,
}

impl<'a> Facts<'a> {
    fn gather(
        config: &'a ActiveModeConfig,
        now: DateTime<Utc>,
        generator: &GeneratorConfig,
    ) -> Self {
        Self {
            desired: config.desired_state,
            cbsd: &config.cbsd,
            active: config.cbsd.is_active(now, generator.inactivity_timeout),
        }
    }

    fn both_registered(&self) -> bool {
        self.desired == CbsdState::Registered && self.cbsd.state == CbsdState::Registered
    }

    fn serving(&self) -> bool {
        self.both_registered() && self.active
    }
}

struct Rule {
    name: &'static str,
    guard: fn(&Facts<'_>) -> bool,
    emit: fn(&Facts<'_>) -> Vec<Action>,
}

const RULES: &[Rule] = &[
    Rule {
        name: "delete_unregistered",
        guard: |f| f.cbsd.is_deleted && f.cbsd.state == CbsdState::Unregistered,
        emit: |f| {
            vec![Action::DeleteCbsd {
                serial_number: f.cbsd.serial_number.clone(),
            }]
        },
    },
    Rule {
        name: "deregister_deleted",
        guard: |f| f.cbsd.is_deleted && f.cbsd.state == CbsdState::Registered,
        emit: deregister,
    },
    Rule {
        name: "deregister_unwanted",
        guard: |f| f.desired == CbsdState::Unregistered && f.cbsd.state == CbsdState::Registered,
        emit: deregister,
    },
    Rule {
        name: "stay_unregistered",
        guard: |f| f.desired == CbsdState::Unregistered && f.cbsd.state == CbsdState::Unregistered,
        emit: |_| Vec::new(),
    },
    Rule {
        name: "register",
        guard: |f| f.desired == CbsdState::Registered && f.cbsd.state == CbsdState::Unregistered,
        emit: |f| {
            if !f.active {
                return Vec::new();
            }
            vec![Action::Request(Request::registration(
                &f.cbsd.user_id,
                &f.cbsd.fcc_id,
                &f.cbsd.serial_number,
            ))]
        },
    },
    Rule {
        name: "relinquish_inactive",
        guard: |f| f.both_registered() && !f.active,
        emit: |f| {
            f.cbsd
                .grants
                .iter()
                .map(|g| Action::Request(Request::relinquishment(&f.cbsd.id, &g.id)))
                .collect()
        },
    },
    Rule {
        name: "maintain_grants",
        guard: |f| f.serving() && !f.cbsd.grants.is_empty(),
        emit: |f| {
            f.cbsd
                .grants
                .iter()
                .map(|g| {
                    let request = match g.state {
                        GrantState::Granted => {
                            Request::heartbeat(&f.cbsd.id, &g.id, OPERATION_STATE_GRANTED)
                        }
                        _ => Request::relinquishment(&f.cbsd.id, &g.id),
                    };
                    Action::Request(request)
                })
                .collect()
        },
    },
    Rule {
        name: "request_grant",
        guard: |f| f.serving() && first_suitable_channel(f.cbsd).is_some(),
        emit: |f| {
            first_suitable_channel(f.cbsd)
                .map(|(range, max_eirp)| {
                    Action::Request(Request::grant(&f.cbsd.id, max_eirp, range))
                })
                .into_iter()
                .collect()
        },
    },
    Rule {
        name: "inquire_spectrum",
        guard: |f| f.serving(),
        emit: |f| {
            vec![Action::Request(Request::spectrum_inquiry(
                &f.cbsd.id, FULL_BAND,
            ))]
        },
    },
];

fn deregister(f: &Facts<'_>) -> Vec<Action> {
    vec![Action::Request(Request::deregistration(&f.cbsd.id))]
}

/// First channel the CBSD can operate on, with the EIRP to request.
/// Without capabilities no channel is usable.
fn first_suitable_channel(cbsd: &Cbsd) -> Option<(FrequencyRange, f64)> {
    let capabilities = cbsd.eirp_capabilities.as_ref()?;
    cbsd.channels.iter().find_map(|channel| {
        channel
            .frequency_range
            .zip(eirp::operating_eirp(capabilities, channel))
    })
}

/// Actions for a single CBSD, in emission order.
pub fn generate_for_config(
    config: &ActiveModeConfig,
    now: DateTime<Utc>,
    generator: &GeneratorConfig,
) -> Vec<Action> {
    let cbsd = &config.cbsd;
    let facts = Facts::gather(config, now, generator);

    let Some(rule) = RULES.iter().find(|rule| (rule.guard)(&facts)) else {
        debug!(serial_number = %cbsd.serial_number, "no rule matched");
        return Vec::new();
    };

    let actions = (rule.emit)(&facts);
    debug!(
        serial_number = %cbsd.serial_number,
        cbsd_id = %cbsd.id,
        rule = rule.name,
        actions = actions.len(),
        "evaluated cbsd"
    );
    actions
}

/// Actions for every CBSD in the snapshot, concatenated in input order.
pub fn generate_messages(
    state: &State,
    now: DateTime<Utc>,
    generator: &GeneratorConfig,
) -> Vec<Action> {
    state
        .active_mode_configs
        .iter()
        .flat_map(|config| generate_for_config(config, now, generator))
        .collect()
}

/// Name of the rule that decides this CBSD's actions.
pub fn matching_rule(
    config: &ActiveModeConfig,
    now: DateTime<Utc>,
    generator: &GeneratorConfig,
) -> Option<&'static str> {
    let facts = Facts::gather(config, now, generator);
    RULES
        .iter()
        .find(|rule| (rule.guard)(&facts))
        .map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Channel, EirpCapabilities};

    fn registered(cbsd: Cbsd) -> ActiveModeConfig {
        ActiveModeConfig {
            desired_state: CbsdState::Registered,
            cbsd: Cbsd {
                state: CbsdState::Registered,
                ..cbsd
            },
        }
    }

    #[test]
    fn rule_table_covers_every_state_pair() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).expect("valid");
        let generator = GeneratorConfig::default();
        for desired in [CbsdState::Unregistered, CbsdState::Registered] {
            for actual in [CbsdState::Unregistered, CbsdState::Registered] {
                for last_seen in [0, 1_700_000_000] {
                    let config = ActiveModeConfig {
                        desired_state: desired,
                        cbsd: Cbsd {
                            state: actual,
                            last_seen_timestamp: last_seen,
                            ..Cbsd::default()
                        },
                    };
                    assert!(matching_rule(&config, now, &generator).is_some());
                }
            }
        }
    }

    #[test]
    fn missing_capabilities_fall_back_to_inquiry() {
        let now = DateTime::from_timestamp(1000, 0).expect("valid");
        let config = registered(Cbsd {
            id: "id".into(),
            last_seen_timestamp: 1000,
            channels: vec![Channel {
                frequency_range: Some(FrequencyRange::new(3.62e9, 3.63e9)),
                max_eirp: Some(30.0),
            }],
            ..Cbsd::default()
        });

        let generator = GeneratorConfig::default();
        assert_eq!(matching_rule(&config, now, &generator), Some("inquire_spectrum"));
        assert_eq!(
            generate_for_config(&config, now, &generator),
            vec![Action::Request(Request::spectrum_inquiry("id", FULL_BAND))]
        );
    }

    #[test]
    fn first_suitable_channel_wins() {
        let cbsd = Cbsd {
            channels: vec![
                Channel {
                    frequency_range: Some(FrequencyRange::new(3.55e9, 3.56e9)),
                    max_eirp: Some(-5.0),
                },
                Channel {
                    frequency_range: Some(FrequencyRange::new(3.60e9, 3.61e9)),
                    max_eirp: Some(20.0),
                },
                Channel {
                    frequency_range: Some(FrequencyRange::new(3.65e9, 3.66e9)),
                    max_eirp: Some(30.0),
                },
            ],
            eirp_capabilities: Some(EirpCapabilities {
                min_power: 0.0,
                max_power: 10.0,
                antenna_gain: 5.0,
                number_of_ports: 1,
            }),
            ..Cbsd::default()
        };

        let (range, max_eirp) = first_suitable_channel(&cbsd).expect("suitable channel");
        assert_eq!(range, FrequencyRange::new(3.60e9, 3.61e9));
        assert!((max_eirp - 15.0).abs() < f64::EPSILON);
    }
}
