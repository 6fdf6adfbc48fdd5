//! Terraform rendering: an `aws_iam_policy_document` data source plus an
//! `aws_iam_policy` resource that references it.

use crate::policy_generation::{Effect, IamPolicy, OneOrMany};

/// Name shared by the emitted data source and resource
const BLOCK_NAME: &str = "generated";

/// Name given to the emitted `aws_iam_policy`
const POLICY_NAME: &str = "tf-iam-scanner-generated";

pub(super) fn render(policy: &IamPolicy) -> String {
    let statements = policy
        .statements
        .iter()
        .map(|statement| {
            let mut block = String::from("  statement {\n");
            block.push_str(&format!("    effect = \"{}\"\n", effect_name(statement.effect)));
            push_list(&mut block, "actions", &statement.action);
            push_list(&mut block, "resources", &statement.resource);
            block.push_str("  }");
            block
        })
        .collect::<Vec<_>>()
        .join("\n");

    let mut out = format!("data \"aws_iam_policy_document\" \"{}\" {{\n", BLOCK_NAME);
    out.push_str(&statements);
    out.push_str("\n}\n");
    out.push_str(&format!("\nresource \"aws_iam_policy\" \"{}\" {{\n", BLOCK_NAME));
    out.push_str(&format!("  name   = \"{}\"\n", POLICY_NAME));
    out.push_str(&format!(
        "  policy = data.aws_iam_policy_document.{}.json\n",
        BLOCK_NAME
    ));
    out.push_str("}\n");
    out
}

fn effect_name(effect: Effect) -> &'static str {
    match effect {
        Effect::Allow => "Allow",
    }
}

/// Write `name = [...]`; a single value stays inline, an empty list is omitted
fn push_list(out: &mut String, name: &str, values: &OneOrMany) {
    match values {
        OneOrMany::One(value) => out.push_str(&format!("    {} = [\"{}\"]\n", name, value)),
        OneOrMany::Many(values) if values.is_empty() => {}
        OneOrMany::Many(values) => {
            out.push_str(&format!("    {} = [\n", name));
            for value in values {
                out.push_str(&format!("      \"{}\",\n", value));
            }
            out.push_str("    ]\n");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy_generation::Statement;

    #[test]
    fn test_render_statements_and_companion_resource() {
        let policy = IamPolicy::new(vec![
            Statement::allow(
                vec!["s3:GetObject".to_string(), "s3:PutObject".to_string()],
                "arn:aws:s3:::*",
            ),
            Statement::allow(vec!["sts:GetCallerIdentity".to_string()], "*"),
        ]);

        let expected = r#"data "aws_iam_policy_document" "generated" {
  statement {
    effect = "Allow"
    actions = [
      "s3:GetObject",
      "s3:PutObject",
    ]
    resources = ["arn:aws:s3:::*"]
  }
  statement {
    effect = "Allow"
    actions = [
      "sts:GetCallerIdentity",
    ]
    resources = ["*"]
  }
}

resource "aws_iam_policy" "generated" {
  name   = "tf-iam-scanner-generated"
  policy = data.aws_iam_policy_document.generated.json
}
"#;

        assert_eq!(render(&policy), expected);
    }

    #[test]
    fn test_empty_action_list_is_omitted() {
        let policy = IamPolicy::new(vec![Statement::allow(vec![], "*")]);

        let rendered = render(&policy);

        assert!(!rendered.contains("actions"));
        assert!(rendered.contains("resources = [\"*\"]"));
    }

    #[test]
    fn test_output_is_valid_hcl() {
        let policy = IamPolicy::new(vec![Statement::allow(
            vec!["ec2:*".to_string(), "s3:ListBucket".to_string()],
            "*",
        )]);

        let body: hcl::Body = hcl::parse(&render(&policy)).unwrap();

        let identifiers: Vec<_> = body.blocks().map(|block| block.identifier()).collect();
        assert_eq!(identifiers, vec!["data", "resource"]);
    }
}
