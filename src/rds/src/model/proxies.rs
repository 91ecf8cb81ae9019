// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Database proxies, their target groups and targets.

use super::*;

message! {
    /// A proxy pooling connections to instances and clusters.
    pub struct DbProxy {
        "DBProxyName" => db_proxy_name: opt String,
        "DBProxyArn" => db_proxy_arn: opt String,
        "Status" => status: opt String,
        /// `MYSQL` or `POSTGRESQL`.
        "EngineFamily" => engine_family: opt String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "VpcSubnetIds" => vpc_subnet_ids: list String,
        "Auth" => auth: list UserAuthConfigInfo,
        "RoleArn" => role_arn: opt String,
        "Endpoint" => endpoint: opt String,
        "RequireTLS" => require_tls: opt bool,
        /// Seconds a client connection can be idle before the proxy closes
        /// it.
        "IdleClientTimeout" => idle_client_timeout: opt i32,
        "DebugLogging" => debug_logging: opt bool,
        "CreatedDate" => created_date: opt Timestamp,
        "UpdatedDate" => updated_date: opt Timestamp,
    }
}

message! {
    /// How a proxy authenticates to its targets.
    pub struct UserAuthConfig {
        "Description" => description: opt String,
        "UserName" => user_name: opt String,
        "AuthScheme" => auth_scheme: opt String,
        /// The secret holding the database credentials.
        "SecretArn" => secret_arn: opt String,
        /// `DISABLED` or `REQUIRED`.
        "IAMAuth" => iam_auth: opt String,
    }
}

message! {
    pub struct UserAuthConfigInfo {
        "Description" => description: opt String,
        "UserName" => user_name: opt String,
        "AuthScheme" => auth_scheme: opt String,
        "SecretArn" => secret_arn: opt String,
        "IAMAuth" => iam_auth: opt String,
    }
}

message! {
    pub struct ConnectionPoolConfiguration {
        "MaxConnectionsPercent" => max_connections_percent: opt i32,
        "MaxIdleConnectionsPercent" => max_idle_connections_percent: opt i32,
        /// Seconds to wait for a connection to become available.
        "ConnectionBorrowTimeout" => connection_borrow_timeout: opt i32,
        "SessionPinningFilters" => session_pinning_filters: list String,
        "InitQuery" => init_query: opt String,
    }
}

message! {
    pub struct ConnectionPoolConfigurationInfo {
        "MaxConnectionsPercent" => max_connections_percent: opt i32,
        "MaxIdleConnectionsPercent" => max_idle_connections_percent: opt i32,
        "ConnectionBorrowTimeout" => connection_borrow_timeout: opt i32,
        "SessionPinningFilters" => session_pinning_filters: list String,
        "InitQuery" => init_query: opt String,
    }
}

message! {
    /// A set of instances or clusters a proxy connects to.
    pub struct DbProxyTargetGroup {
        "DBProxyName" => db_proxy_name: opt String,
        "TargetGroupName" => target_group_name: opt String,
        "TargetGroupArn" => target_group_arn: opt String,
        "IsDefault" => is_default: opt bool,
        "Status" => status: opt String,
        "ConnectionPoolConfig" => connection_pool_config: opt ConnectionPoolConfigurationInfo,
        "CreatedDate" => created_date: opt Timestamp,
        "UpdatedDate" => updated_date: opt Timestamp,
    }
}

message! {
    pub struct TargetHealth {
        "State" => state: opt String,
        "Reason" => reason: opt String,
        "Description" => description: opt String,
    }
}

message! {
    /// An instance or cluster a proxy connects to.
    pub struct DbProxyTarget {
        "TargetArn" => target_arn: opt String,
        "Endpoint" => endpoint: opt String,
        "TrackedClusterId" => tracked_cluster_id: opt String,
        "RdsResourceId" => rds_resource_id: opt String,
        "Port" => port: opt i32,
        /// `RDS_INSTANCE`, `RDS_SERVERLESS_ENDPOINT`, or `TRACKED_CLUSTER`.
        "Type" => target_type: opt String,
        "TargetHealth" => target_health: opt TargetHealth,
    }
}

message! {
    #[builder(CreateDbProxy)]
    pub struct CreateDbProxyRequest {
        "DBProxyName" => db_proxy_name: req String,
        "EngineFamily" => engine_family: req String,
        "Auth" => auth: list UserAuthConfig,
        "RoleArn" => role_arn: req String,
        "VpcSubnetIds" => vpc_subnet_ids: list String,
        "VpcSecurityGroupIds" => vpc_security_group_ids: list String,
        "RequireTLS" => require_tls: opt bool,
        "IdleClientTimeout" => idle_client_timeout: opt i32,
        "DebugLogging" => debug_logging: opt bool,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbProxyResponse {
        "DBProxy" => db_proxy: opt DbProxy,
    }
}

message! {
    #[builder(DeleteDbProxy)]
    pub struct DeleteDbProxyRequest {
        "DBProxyName" => db_proxy_name: req String,
    }
}

message! {
    pub struct DeleteDbProxyResponse {
        "DBProxy" => db_proxy: opt DbProxy,
    }
}

message! {
    #[builder(DescribeDbProxies)]
    pub struct DescribeDbProxiesRequest {
        "DBProxyName" => db_proxy_name: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
    }
}

message! {
    pub struct DescribeDbProxiesResponse {
        "DBProxies" => db_proxies: list DbProxy,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbProxiesResponse, db_proxies: DbProxy);

message! {
    #[builder(ModifyDbProxy)]
    pub struct ModifyDbProxyRequest {
        "DBProxyName" => db_proxy_name: req String,
        "NewDBProxyName" => new_db_proxy_name: opt String,
        "Auth" => auth: list UserAuthConfig,
        "RequireTLS" => require_tls: opt bool,
        "IdleClientTimeout" => idle_client_timeout: opt i32,
        "DebugLogging" => debug_logging: opt bool,
        "RoleArn" => role_arn: opt String,
        "SecurityGroups" => security_groups: list String,
    }
}

message! {
    pub struct ModifyDbProxyResponse {
        "DBProxy" => db_proxy: opt DbProxy,
    }
}

message! {
    #[builder(DescribeDbProxyTargetGroups)]
    pub struct DescribeDbProxyTargetGroupsRequest {
        "DBProxyName" => db_proxy_name: req String,
        "TargetGroupName" => target_group_name: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
    }
}

message! {
    pub struct DescribeDbProxyTargetGroupsResponse {
        "TargetGroups" => target_groups: list DbProxyTargetGroup,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbProxyTargetGroupsResponse, target_groups: DbProxyTargetGroup);

message! {
    #[builder(ModifyDbProxyTargetGroup)]
    pub struct ModifyDbProxyTargetGroupRequest {
        "TargetGroupName" => target_group_name: req String,
        "DBProxyName" => db_proxy_name: req String,
        "ConnectionPoolConfig" => connection_pool_config: opt ConnectionPoolConfiguration,
        "NewName" => new_name: opt String,
    }
}

message! {
    pub struct ModifyDbProxyTargetGroupResponse {
        "DBProxyTargetGroup" => db_proxy_target_group: opt DbProxyTargetGroup,
    }
}

message! {
    #[builder(DescribeDbProxyTargets)]
    pub struct DescribeDbProxyTargetsRequest {
        "DBProxyName" => db_proxy_name: req String,
        "TargetGroupName" => target_group_name: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
    }
}

message! {
    pub struct DescribeDbProxyTargetsResponse {
        "Targets" => targets: list DbProxyTarget,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbProxyTargetsResponse, targets: DbProxyTarget);

message! {
    /// Adds instances or clusters to a proxy target group.
    #[builder(RegisterDbProxyTargets)]
    pub struct RegisterDbProxyTargetsRequest {
        "DBProxyName" => db_proxy_name: req String,
        /// The `default` target group if unset.
        "TargetGroupName" => target_group_name: opt String,
        "DBInstanceIdentifiers" => db_instance_identifiers: list String,
        "DBClusterIdentifiers" => db_cluster_identifiers: list String,
    }
}

message! {
    pub struct RegisterDbProxyTargetsResponse {
        "DBProxyTargets" => db_proxy_targets: list DbProxyTarget,
    }
}

message! {
    #[builder(DeregisterDbProxyTargets)]
    pub struct DeregisterDbProxyTargetsRequest {
        "DBProxyName" => db_proxy_name: req String,
        "TargetGroupName" => target_group_name: opt String,
        "DBInstanceIdentifiers" => db_instance_identifiers: list String,
        "DBClusterIdentifiers" => db_cluster_identifiers: list String,
    }
}

message! {
    /// The service returns no data for this operation.
    pub struct DeregisterDbProxyTargetsResponse {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn target_type_wire_name() -> anyhow::Result<()> {
        let input = json!({
            "TargetArn": "arn:aws:rds:us-east-1:123456789012:db:my-db",
            "Port": 3306,
            "Type": "RDS_INSTANCE",
            "TargetHealth": {"State": "AVAILABLE"},
        });
        let target = serde_json::from_value::<DbProxyTarget>(input.clone())?;
        assert_eq!(target.target_type.as_deref(), Some("RDS_INSTANCE"));
        assert_eq!(
            target.target_health.as_ref().and_then(|h| h.state.as_deref()),
            Some("AVAILABLE")
        );
        assert_eq!(serde_json::to_value(&target)?, input);
        Ok(())
    }

    #[test]
    fn empty_response() -> anyhow::Result<()> {
        let response = serde_json::from_value::<DeregisterDbProxyTargetsResponse>(json!({}))?;
        assert_eq!(response, DeregisterDbProxyTargetsResponse::new());
        Ok(())
    }
}
