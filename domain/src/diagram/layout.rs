//! Fixed-formula layout for the landing-zone diagram.
//!
//! No constraint solving: every coordinate is arithmetic over the three OU
//! list lengths. The page grows vertically so the tallest OU always fits.
//! One directed connector runs from the master container down to each OU
//! container (not to individual accounts).

use crate::architecture::model::{Account, Architecture};
use crate::diagram::model::{DiagramDoc, Geometry};

// AWS diagram palette
const PINK: &str = "#D6336C";
const LIGHT_PINK: &str = "#F4E1E8";
const WHITE: &str = "#FFFFFF";
const DARK: &str = "#232F3E";
const GRAY: &str = "#879196";

const PAGE_WIDTH: i32 = 1600;
const BASE_HEIGHT: i32 = 450;
const ROW_HEIGHT: i32 = 80;
const MIN_ROWS: i32 = 3;

const OU_Y: i32 = 450;
const OU_WIDTH: i32 = 450;
const OU_LANES_X: [i32; 3] = [60, 540, 1020];
const ACCOUNT_BASE_Y: i32 = 555;

fn icon_style(res_icon: &str, fill: &str) -> String {
    format!(
        "sketch=0;outlineConnect=0;fontColor=#232F3E;fillColor={fill};strokeColor=#ffffff;\
         dashed=0;verticalLabelPosition=bottom;verticalAlign=top;align=center;html=1;\
         fontSize=12;fontStyle=0;aspect=fixed;shape=mxgraph.aws4.resourceIcon;\
         resIcon=mxgraph.aws4.{res_icon};"
    )
}

fn text_style(font_size: u32, color: &str, bold: bool) -> String {
    format!(
        "text;html=1;strokeColor=none;fillColor=none;align=center;verticalAlign=top;\
         whiteSpace=wrap;fontSize={font_size};fontColor={color};fontStyle={};",
        if bold { 1 } else { 0 }
    )
}

fn dashed_container_style(stroke: &str) -> String {
    format!(
        "rounded=0;whiteSpace=wrap;html=1;fillColor=none;strokeColor={stroke};\
         strokeWidth=2;dashed=1;dashPattern=5 5;"
    )
}

fn arrow_style() -> String {
    format!(
        "edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;\
         strokeColor={DARK};strokeWidth=2;endArrow=classic;endFill=1;"
    )
}

/// Page height formula: the tallest OU (at least 3 rows) always fits.
pub fn page_height(architecture: &Architecture) -> i32 {
    let s = &architecture.account_structure;
    let max_accounts = s
        .security_ou
        .len()
        .max(s.workload_ou.len())
        .max(s.networking_ou.len())
        .max(MIN_ROWS as usize) as i32;
    BASE_HEIGHT + max_accounts * ROW_HEIGHT
}

fn fixed_decorations(doc: &mut DiagramDoc) {
    doc.vertex(
        "aws-logo",
        "",
        icon_style("logo", DARK),
        Geometry::new(40, 30, 40, 40),
    );
    doc.vertex(
        "aws-text",
        "AWS Cloud",
        "text;html=1;strokeColor=none;fillColor=none;align=left;verticalAlign=middle;\
         whiteSpace=wrap;fontSize=14;fontColor=#232F3E;fontStyle=1;",
        Geometry::new(90, 37, 100, 26),
    );
    doc.vertex(
        "org-icon",
        "",
        icon_style("organizations", PINK),
        Geometry::new(65, 135, 48, 48),
    );
    doc.vertex(
        "ct-icon",
        "",
        icon_style("control_tower", PINK),
        Geometry::new(80, 210, 48, 48),
    );
    doc.vertex(
        "ct-label",
        "Control Tower",
        text_style(10, DARK, true),
        Geometry::new(64, 262, 80, 20),
    );
    doc.vertex(
        "admin-user",
        "",
        icon_style("user", PINK),
        Geometry::new(600, 140, 32, 32),
    );
    doc.vertex(
        "admin-label",
        "Administrator",
        text_style(10, DARK, false),
        Geometry::new(576, 176, 80, 20),
    );
    doc.vertex(
        "user-admin",
        "",
        icon_style("user", GRAY),
        Geometry::new(720, 235, 36, 36),
    );
    doc.vertex(
        "user-admin-label",
        "Administrator/Root",
        text_style(9, DARK, true),
        Geometry::new(691, 275, 94, 18),
    );
    doc.vertex(
        "user-dev",
        "",
        icon_style("users", GRAY),
        Geometry::new(845, 235, 36, 36),
    );
    doc.vertex(
        "user-dev-label",
        "Developers/Testers",
        text_style(9, DARK, true),
        Geometry::new(813, 275, 100, 18),
    );
    doc.vertex(
        "iam-center",
        "",
        icon_style("identity_and_access_management", PINK),
        Geometry::new(990, 195, 48, 48),
    );
    doc.vertex(
        "iam-label",
        "Identity Center",
        text_style(10, DARK, true),
        Geometry::new(970, 247, 88, 20),
    );
    doc.vertex(
        "onprem",
        "",
        icon_style("corporate_data_center", GRAY),
        Geometry::new(994, 340, 40, 40),
    );
    doc.vertex(
        "onprem-label",
        "On-Premises<br>/ AWS Cloud AD",
        text_style(9, DARK, false),
        Geometry::new(959, 384, 110, 26),
    );
    doc.vertex(
        "perm-admin",
        "",
        icon_style("permissions", PINK),
        Geometry::new(1150, 165, 40, 40),
    );
    doc.vertex(
        "perm-admin-label",
        "Admin Permission<br>Set",
        text_style(9, DARK, false),
        Geometry::new(1130, 209, 80, 24),
    );
    doc.vertex(
        "perm-dev",
        "",
        icon_style("permissions", PINK),
        Geometry::new(1150, 255, 40, 40),
    );
    doc.vertex(
        "perm-dev-label",
        "Dev/Tester<br>Permission Set",
        text_style(9, DARK, false),
        Geometry::new(1125, 299, 90, 24),
    );

    // identity flow connectors
    doc.edge("arrow-users-iam", arrow_style(), (756, 253), (990, 219), vec![(850, 253), (850, 219)]);
    doc.edge("arrow-devs-iam", arrow_style(), (881, 253), (990, 219), vec![(920, 253), (920, 219)]);
    doc.edge("arrow-iam-onprem", arrow_style(), (1014, 307), (1014, 340), vec![]);
    doc.edge("arrow-iam-perm-admin", arrow_style(), (1038, 207), (1150, 185), vec![(1090, 207), (1090, 185)]);
    doc.edge("arrow-iam-perm-dev", arrow_style(), (1038, 231), (1150, 275), vec![(1090, 231), (1090, 275)]);
}

fn ou_lane(
    doc: &mut DiagramDoc,
    id_prefix: &str,
    label: &str,
    lane_x: i32,
    accounts: &[Account],
) {
    if accounts.is_empty() {
        return;
    }
    let height = 120 + accounts.len() as i32 * ROW_HEIGHT;
    doc.vertex(
        format!("{id_prefix}-ou-container"),
        "",
        dashed_container_style(PINK),
        Geometry::new(lane_x, OU_Y, OU_WIDTH, height),
    );
    doc.vertex(
        format!("{id_prefix}-ou-icon"),
        "",
        icon_style("organizational_unit", PINK),
        Geometry::new(lane_x + OU_WIDTH / 2 - 18, OU_Y + 20, 36, 36),
    );
    doc.vertex(
        format!("{id_prefix}-ou-label"),
        label,
        text_style(12, PINK, true),
        Geometry::new(lane_x + 20, OU_Y + 68, OU_WIDTH - 40, 20),
    );

    for (i, account) in accounts.iter().enumerate() {
        let row_y = ACCOUNT_BASE_Y + i as i32 * ROW_HEIGHT;
        doc.vertex(
            format!("{id_prefix}-acc-{i}"),
            &account.name,
            format!(
                "rounded=1;whiteSpace=wrap;html=1;fillColor={WHITE};strokeColor={PINK};\
                 strokeWidth=2;fontSize=11;fontStyle=1;fontColor={PINK};\
                 verticalAlign=middle;align=left;spacingLeft=50;"
            ),
            Geometry::new(lane_x + 20, row_y, OU_WIDTH - 40, 60),
        );
        doc.vertex(
            format!("{id_prefix}-acc-icon-{i}"),
            "",
            icon_style("account", PINK),
            Geometry::new(lane_x + 35, row_y + 15, 30, 30),
        );
    }

    // master container bottom edge is at y=320
    let mid_x = lane_x + OU_WIDTH / 2;
    doc.edge(
        format!("arrow-master-{id_prefix}"),
        arrow_style(),
        (mid_x, 320),
        (mid_x, OU_Y),
        vec![],
    );
}

/// Lay out a normalized architecture into a [`DiagramDoc`].
pub fn layout_architecture(architecture: &Architecture) -> DiagramDoc {
    let height = page_height(architecture);
    let mut doc = DiagramDoc::new("AWS Landing Zone", PAGE_WIDTH, height);
    let s = &architecture.account_structure;

    doc.vertex(
        "outer-boundary",
        "",
        dashed_container_style(DARK),
        Geometry::new(30, 90, 1540, height - 100),
    );

    let master = &s.master_account;
    doc.vertex(
        "master-account",
        format!(
            "{}<br><font style=\"font-size: 10px;\">{}</font>",
            master.name, master.email
        ),
        format!(
            "rounded=1;whiteSpace=wrap;html=1;fillColor={LIGHT_PINK};strokeColor={PINK};\
             strokeWidth=3;fontSize=13;fontStyle=1;fontColor={PINK};verticalAlign=top;\
             align=left;spacingLeft=70;spacingTop=10;"
        ),
        Geometry::new(50, 120, 1500, 200),
    );

    fixed_decorations(&mut doc);

    let client = &architecture.client_name;
    ou_lane(
        &mut doc,
        "sec",
        &format!("{client} Security OU"),
        OU_LANES_X[0],
        &s.security_ou,
    );
    ou_lane(
        &mut doc,
        "work",
        &format!("{client} Workload OU"),
        OU_LANES_X[1],
        &s.workload_ou,
    );
    ou_lane(
        &mut doc,
        "net",
        &format!("{client} Networking OU"),
        OU_LANES_X[2],
        &s.networking_ou,
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::architecture::model::{Account, MasterAccount};
    use crate::diagram::model::Cell;

    fn sample(sec: usize, work: usize, net: usize) -> Architecture {
        let mk = |prefix: &str, n: usize| -> Vec<Account> {
            (0..n)
                .map(|i| Account::new(format!("{prefix} {i}"), format!("{prefix}{i}@x.com"), ""))
                .collect()
        };
        let mut arch = Architecture::default();
        arch.client_name = "Acme".into();
        arch.account_structure.master_account = MasterAccount {
            name: "Acme Master/Payer Account".into(),
            email: "master@acme.com".into(),
            purpose: String::new(),
        };
        arch.account_structure.security_ou = mk("Sec", sec);
        arch.account_structure.workload_ou = mk("Work", work);
        arch.account_structure.networking_ou = mk("Net", net);
        arch
    }

    #[test]
    fn page_height_uses_tallest_ou_with_floor() {
        assert_eq!(page_height(&sample(2, 2, 1)), 450 + 3 * 80);
        assert_eq!(page_height(&sample(2, 5, 1)), 450 + 5 * 80);
    }

    #[test]
    fn one_account_box_per_account() {
        let doc = layout_architecture(&sample(2, 3, 1));
        let boxes = doc
            .cells
            .iter()
            .filter(|c| {
                matches!(c, Cell::Vertex { id, .. }
                    if id.contains("-acc-") && !id.contains("icon"))
            })
            .count();
        assert_eq!(boxes, 6);
    }

    #[test]
    fn master_connects_to_each_populated_ou_only() {
        let doc = layout_architecture(&sample(2, 2, 1));
        let master_edges: Vec<&str> = doc
            .cells
            .iter()
            .filter_map(|c| match c {
                Cell::Edge { id, .. } if id.starts_with("arrow-master-") => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            master_edges,
            ["arrow-master-sec", "arrow-master-work", "arrow-master-net"]
        );
    }

    #[test]
    fn empty_ou_emits_no_lane() {
        let doc = layout_architecture(&sample(2, 2, 0));
        assert!(!doc.cells.iter().any(|c| c.id() == "net-ou-container"));
        assert!(!doc.cells.iter().any(|c| c.id() == "arrow-master-net"));
    }

    #[test]
    fn account_rows_stack_at_fixed_pitch() {
        let doc = layout_architecture(&sample(3, 2, 1));
        let ys: Vec<i32> = doc
            .cells
            .iter()
            .filter_map(|c| match c {
                Cell::Vertex { id, geometry, .. }
                    if id.starts_with("sec-acc-") && !id.contains("icon") =>
                {
                    Some(geometry.y)
                }
                _ => None,
            })
            .collect();
        assert_eq!(ys, [555, 635, 715]);
    }
}
