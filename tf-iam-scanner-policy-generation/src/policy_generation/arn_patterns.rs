//! Resource ARN patterns used by least-privilege statements

use std::collections::HashMap;
use std::sync::LazyLock;

/// Resource scope used for services without a known pattern
pub(crate) const ANY_RESOURCE: &str = "*";

static SERVICE_ARN_PATTERNS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("ec2", "arn:aws:ec2:*:*:*"),
        ("s3", "arn:aws:s3:::*"),
        ("iam", "arn:aws:iam::*:*"),
        ("rds", "arn:aws:rds:*:*:*"),
        ("lambda", "arn:aws:lambda:*:*:*"),
        ("apigateway", "arn:aws:apigateway:*::*"),
        ("sns", "arn:aws:sns:*:*:*"),
        ("sqs", "arn:aws:sqs:*:*:*"),
        ("dynamodb", "arn:aws:dynamodb:*:*:*"),
        ("logs", "arn:aws:logs:*:*:*"),
        ("cloudwatch", "arn:aws:cloudwatch:*:*:*"),
        ("autoscaling", "arn:aws:autoscaling:*:*:*"),
        ("application-autoscaling", "arn:aws:application-autoscaling:*:*:*"),
        ("route53", "arn:aws:route53:::*"),
        ("cloudfront", "arn:aws:cloudfront:::*"),
        ("elasticloadbalancing", "arn:aws:elasticloadbalancing:*:*:*"),
        ("elasticfilesystem", "arn:aws:elasticfilesystem:*:*:*"),
        ("secretsmanager", "arn:aws:secretsmanager:*:*:*"),
        ("kms", "arn:aws:kms:*:*:*"),
        ("ecr", "arn:aws:ecr:*:*:repository/*"),
        ("ecs", "arn:aws:ecs:*:*:*"),
        ("eks", "arn:aws:eks:*:*:cluster/*"),
        ("events", "arn:aws:events:*:*:rule/*"),
        ("codepipeline", "arn:aws:codepipeline:*:*:*"),
        ("codedeploy", "arn:aws:codedeploy:*:*:*"),
        ("codebuild", "arn:aws:codebuild:*:*:project/*"),
        ("codecommit", "arn:aws:codecommit:*:*:*"),
        ("glue", "arn:aws:glue:*:*:*"),
        ("redshift", "arn:aws:redshift:*:*:cluster:*"),
        ("elasticache", "arn:aws:elasticache:*:*:*"),
        ("es", "arn:aws:es:*:*:domain/*"),
        ("kinesis", "arn:aws:kinesis:*:*:stream/*"),
        ("firehose", "arn:aws:firehose:*:*:deliverystream/*"),
        ("athena", "arn:aws:athena:*:*:workgroup/*"),
        ("datasync", "arn:aws:datasync:*:*:*"),
        ("backup", "arn:aws:backup:*:*:*"),
        ("batch", "arn:aws:batch:*:*:*"),
        ("guardduty", "arn:aws:guardduty:*:*:detector/*"),
        ("securityhub", "arn:aws:securityhub:*:*:hub/default"),
        ("inspector", "arn:aws:inspector:*:*:*"),
        ("config", "arn:aws:config:*:*:*"),
        ("waf", "arn:aws:waf:::*"),
        ("waf-regional", "arn:aws:waf-regional:*:*:*"),
        ("wafv2", "arn:aws:wafv2:*:*:*"),
        ("shield", "arn:aws:shield:::*"),
        ("ssm", "arn:aws:ssm:*:*:*"),
        ("transfer", "arn:aws:transfer:*:*:server/*"),
        ("mq", "arn:aws:mq:*:*:broker/*"),
        ("iot", "arn:aws:iot:*:*:*"),
        ("mobiletargeting", "arn:aws:mobiletargeting:*:*:apps/*"),
        ("mediaconvert", "arn:aws:mediaconvert:*:*:queues/*"),
        ("mediastore", "arn:aws:mediastore:*:*:container/*"),
        ("storagegateway", "arn:aws:storagegateway:*:*:gateway/*"),
        ("servicediscovery", "arn:aws:servicediscovery:*:*:*"),
        ("appmesh", "arn:aws:appmesh:*:*:mesh/*"),
        ("states", "arn:aws:states:*:*:stateMachine:*"),
        ("network-firewall", "arn:aws:network-firewall:*:*:*"),
        ("amplify", "arn:aws:amplify:*:*:*"),
        ("appsync", "arn:aws:appsync:*:*:apis/*"),
        ("cognito-idp", "arn:aws:cognito-idp:*:*:userpool/*"),
        ("cognito-identity", "arn:aws:cognito-identity:*:*:identitypool/*"),
        ("fsx", "arn:aws:fsx:*:*:file-system/*"),
        ("qldb", "arn:aws:qldb:*:*:*"),
        ("timestream", "arn:aws:timestream:*:*:*"),
        ("memorydb", "arn:aws:memorydb:*:*:cluster/*"),
    ])
});

/// Resource ARN pattern granted to a service's statement in least-privilege mode.
///
/// Services missing from the table get `*`.
pub fn resource_arn_for_service(service: &str) -> &'static str {
    SERVICE_ARN_PATTERNS
        .get(service)
        .copied()
        .unwrap_or(ANY_RESOURCE)
}
