//! Interactive graph view of an account structure.
//!
//! Produces the node/edge lists the browser canvas renders. Positions are
//! precomputed here so every client draws the same picture: master account
//! top center, then one horizontal band per populated OU.

use serde::Serialize;

use crate::architecture::model::{Account, Architecture};

const MASTER_X: i32 = 600;
const OU_START_X: i32 = 100;
const HORIZONTAL_SPACING: i32 = 280;
const VERTICAL_SPACING: i32 = 180;
/// Extra gap after each OU band, on top of the regular vertical spacing.
const OU_BAND_GAP: i32 = 120;

const SECURITY_COLOR: &str = "#10B981";
const WORKLOAD_COLOR: &str = "#3B82F6";
const NETWORKING_COLOR: &str = "#8B5CF6";

/// Role of a node in the graph, also selects its styling client side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Master,
    OuLabel,
    Security,
    Workload,
    Networking,
}

/// One positioned node of the graph view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub x: i32,
    pub y: i32,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A directed connector, always from the master account to one member account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub color: String,
}

/// The complete graph view payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

struct OuBand {
    id_prefix: &'static str,
    kind: NodeKind,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
    services: [&'static str; 3],
}

const BANDS: [OuBand; 3] = [
    OuBand {
        id_prefix: "security",
        kind: NodeKind::Security,
        label: "\u{1F6E1}\u{FE0F} Security OU",
        icon: "\u{1F512}",
        color: SECURITY_COLOR,
        services: ["Security Hub", "GuardDuty", "Config"],
    },
    OuBand {
        id_prefix: "workload",
        kind: NodeKind::Workload,
        label: "\u{2699}\u{FE0F} Workload OU",
        icon: "\u{1F4BC}",
        color: WORKLOAD_COLOR,
        services: ["EC2", "RDS", "S3"],
    },
    OuBand {
        id_prefix: "networking",
        kind: NodeKind::Networking,
        label: "\u{1F310} Networking OU",
        icon: "\u{1F517}",
        color: NETWORKING_COLOR,
        services: ["VPC", "Transit Gateway", "Direct Connect"],
    },
];

fn opt(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Build the graph view for a (normalized) architecture.
///
/// Empty OUs contribute no band and shift the ones below them up, exactly
/// like empty lanes are skipped in the drawn diagram.
pub fn build_graph_view(architecture: &Architecture) -> GraphView {
    let mut view = GraphView::default();
    let mut y_offset = 0;

    let master = &architecture.account_structure.master_account;
    let master_label = if master.name.is_empty() {
        "Master Account".to_string()
    } else {
        master.name.clone()
    };
    view.nodes.push(GraphNode {
        id: "master".into(),
        kind: NodeKind::Master,
        x: MASTER_X,
        y: y_offset,
        label: master_label,
        email: opt(&master.email),
        purpose: opt(&master.purpose),
        icon: Some("\u{1F451}".into()),
        badge: Some("Payer Account".into()),
        services: ["Organizations", "Control Tower", "CloudTrail"]
            .map(String::from)
            .to_vec(),
        description: None,
        color: None,
    });
    y_offset += VERTICAL_SPACING;

    let ous = [
        &architecture.account_structure.security_ou,
        &architecture.account_structure.workload_ou,
        &architecture.account_structure.networking_ou,
    ];
    for (band, accounts) in BANDS.iter().zip(ous) {
        if accounts.is_empty() {
            continue;
        }
        push_band(&mut view, band, accounts, y_offset);
        y_offset += VERTICAL_SPACING + OU_BAND_GAP;
    }

    view
}

fn push_band(view: &mut GraphView, band: &OuBand, accounts: &[Account], y_offset: i32) {
    view.nodes.push(GraphNode {
        id: format!("{}-ou-label", band.id_prefix),
        kind: NodeKind::OuLabel,
        x: OU_START_X - 20,
        y: y_offset - 20,
        label: band.label.to_string(),
        email: None,
        purpose: None,
        icon: None,
        badge: None,
        services: Vec::new(),
        description: Some(format!("{} accounts", accounts.len())),
        color: Some(band.color.to_string()),
    });

    for (i, account) in accounts.iter().enumerate() {
        let node_id = format!("{}-{i}", band.id_prefix);
        view.nodes.push(GraphNode {
            id: node_id.clone(),
            kind: band.kind,
            x: OU_START_X + i as i32 * HORIZONTAL_SPACING,
            y: y_offset + 60,
            label: account.name.clone(),
            email: opt(&account.email),
            purpose: opt(&account.purpose),
            icon: Some(band.icon.to_string()),
            badge: None,
            services: band.services.map(String::from).to_vec(),
            description: None,
            color: None,
        });
        view.edges.push(GraphEdge {
            id: format!("master-to-{node_id}"),
            source: "master".into(),
            target: node_id,
            color: band.color.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture::model::MasterAccount;

    fn arch() -> Architecture {
        let mut a = Architecture::default();
        a.account_structure.master_account = MasterAccount {
            name: "Acme Master/Payer Account".into(),
            email: "master@acme.com".into(),
            purpose: "Org root".into(),
        };
        a.account_structure.security_ou = vec![
            Account::new("Audit", "sec-1@acme.com", "Audit"),
            Account::new("Log Archive", "sec-2@acme.com", "Logs"),
        ];
        a.account_structure.workload_ou = vec![
            Account::new("Development", "work-1@acme.com", "Dev"),
            Account::new("Production", "work-2@acme.com", "Prod"),
        ];
        a.account_structure.networking_ou =
            vec![Account::new("Shared Services", "net-1@acme.com", "Net")];
        a
    }

    #[test]
    fn master_sits_top_center() {
        let view = build_graph_view(&arch());
        let master = &view.nodes[0];
        assert_eq!(master.id, "master");
        assert_eq!((master.x, master.y), (600, 0));
        assert_eq!(master.badge.as_deref(), Some("Payer Account"));
    }

    #[test]
    fn every_account_is_wired_to_master() {
        let view = build_graph_view(&arch());
        assert_eq!(view.edges.len(), 5);
        assert!(view.edges.iter().all(|e| e.source == "master"));
        assert!(view.edges.iter().any(|e| e.target == "security-1"));
        assert!(view.edges.iter().any(|e| e.target == "networking-0"));
        assert!(
            view.edges
                .iter()
                .any(|e| e.id == "master-to-workload-0")
        );
    }

    #[test]
    fn bands_stack_with_fixed_offsets() {
        let view = build_graph_view(&arch());
        let y = |id: &str| view.nodes.iter().find(|n| n.id == id).unwrap().y;
        assert_eq!(y("security-0"), 180 + 60);
        assert_eq!(y("workload-0"), 180 + 300 + 60);
        assert_eq!(y("networking-0"), 180 + 600 + 60);
    }

    #[test]
    fn accounts_fan_out_horizontally() {
        let view = build_graph_view(&arch());
        let x = |id: &str| view.nodes.iter().find(|n| n.id == id).unwrap().x;
        assert_eq!(x("security-0"), 100);
        assert_eq!(x("security-1"), 380);
    }

    #[test]
    fn empty_ou_skipped_and_rest_shift_up() {
        let mut a = arch();
        a.account_structure.security_ou.clear();
        let view = build_graph_view(&a);
        assert!(!view.nodes.iter().any(|n| n.id.starts_with("security")));
        let workload = view.nodes.iter().find(|n| n.id == "workload-0").unwrap();
        assert_eq!(workload.y, 180 + 60);
    }

    #[test]
    fn ou_labels_carry_account_counts() {
        let view = build_graph_view(&arch());
        let label = view
            .nodes
            .iter()
            .find(|n| n.id == "security-ou-label")
            .unwrap();
        assert_eq!(label.kind, NodeKind::OuLabel);
        assert_eq!(label.description.as_deref(), Some("2 accounts"));
        assert_eq!((label.x, label.y), (80, 160));
    }

    #[test]
    fn kind_serializes_snake_case() {
        let view = build_graph_view(&arch());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["nodes"][0]["kind"], "master");
        assert_eq!(json["nodes"][1]["kind"], "ou_label");
        // empty optionals stay out of the payload
        assert!(json["nodes"][1].get("email").is_none());
    }
}
