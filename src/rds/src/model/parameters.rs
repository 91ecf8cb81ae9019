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

//! Parameter groups, for both instances and clusters.

use super::*;

message! {
    /// A named set of engine configuration values for database instances.
    pub struct DbParameterGroup {
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "DBParameterGroupFamily" => db_parameter_group_family: opt String,
        "Description" => description: opt String,
        "DBParameterGroupArn" => db_parameter_group_arn: opt String,
    }
}

message! {
    /// A named set of engine configuration values for clusters.
    pub struct DbClusterParameterGroup {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "DBParameterGroupFamily" => db_parameter_group_family: opt String,
        "Description" => description: opt String,
        "DBClusterParameterGroupArn" => db_cluster_parameter_group_arn: opt String,
    }
}

message! {
    /// A single engine parameter.
    pub struct Parameter {
        "ParameterName" => parameter_name: opt String,
        "ParameterValue" => parameter_value: opt String,
        "Description" => description: opt String,
        /// `user`, `system`, or `engine-default`.
        "Source" => source: opt String,
        /// `static` or `dynamic`.
        "ApplyType" => apply_type: opt String,
        "DataType" => data_type: opt String,
        "AllowedValues" => allowed_values: opt String,
        "IsModifiable" => is_modifiable: opt bool,
        "MinimumEngineVersion" => minimum_engine_version: opt String,
        /// `immediate` or `pending-reboot`.
        "ApplyMethod" => apply_method: opt String,
        "SupportedEngineModes" => supported_engine_modes: list String,
    }
}

message! {
    /// The default parameters of an engine family.
    ///
    /// The `marker` continues the listing, the response of
    /// `DescribeEngineDefaultParameters` is not paginated otherwise.
    pub struct EngineDefaults {
        "DBParameterGroupFamily" => db_parameter_group_family: opt String,
        "Marker" => marker: opt String,
        "Parameters" => parameters: list Parameter,
    }
}

message! {
    #[builder(CopyDbClusterParameterGroup)]
    pub struct CopyDbClusterParameterGroupRequest {
        "SourceDBClusterParameterGroupIdentifier" => source_db_cluster_parameter_group_identifier: req String,
        "TargetDBClusterParameterGroupIdentifier" => target_db_cluster_parameter_group_identifier: req String,
        "TargetDBClusterParameterGroupDescription" => target_db_cluster_parameter_group_description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CopyDbClusterParameterGroupResponse {
        "DBClusterParameterGroup" => db_cluster_parameter_group: opt DbClusterParameterGroup,
    }
}

message! {
    #[builder(CopyDbParameterGroup)]
    pub struct CopyDbParameterGroupRequest {
        "SourceDBParameterGroupIdentifier" => source_db_parameter_group_identifier: req String,
        "TargetDBParameterGroupIdentifier" => target_db_parameter_group_identifier: req String,
        "TargetDBParameterGroupDescription" => target_db_parameter_group_description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CopyDbParameterGroupResponse {
        "DBParameterGroup" => db_parameter_group: opt DbParameterGroup,
    }
}

message! {
    #[builder(CreateDbClusterParameterGroup)]
    pub struct CreateDbClusterParameterGroupRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: req String,
        /// E.g. `aurora-postgresql11`.
        "DBParameterGroupFamily" => db_parameter_group_family: req String,
        "Description" => description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbClusterParameterGroupResponse {
        "DBClusterParameterGroup" => db_cluster_parameter_group: opt DbClusterParameterGroup,
    }
}

message! {
    #[builder(CreateDbParameterGroup)]
    pub struct CreateDbParameterGroupRequest {
        "DBParameterGroupName" => db_parameter_group_name: req String,
        "DBParameterGroupFamily" => db_parameter_group_family: req String,
        "Description" => description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbParameterGroupResponse {
        "DBParameterGroup" => db_parameter_group: opt DbParameterGroup,
    }
}

message! {
    #[builder(DeleteDbClusterParameterGroup)]
    pub struct DeleteDbClusterParameterGroupRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: req String,
    }
}

message! {
    /// Deletes a parameter group. The group must not be in use.
    #[builder(DeleteDbParameterGroup)]
    pub struct DeleteDbParameterGroupRequest {
        "DBParameterGroupName" => db_parameter_group_name: req String,
    }
}

message! {
    #[builder(DescribeDbClusterParameterGroups)]
    pub struct DescribeDbClusterParameterGroupsRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbClusterParameterGroupsResponse {
        "Marker" => marker: opt String,
        "DBClusterParameterGroups" => db_cluster_parameter_groups: list DbClusterParameterGroup,
    }
}

pageable!(
    DescribeDbClusterParameterGroupsResponse,
    db_cluster_parameter_groups: DbClusterParameterGroup
);

message! {
    #[builder(DescribeDbClusterParameters)]
    pub struct DescribeDbClusterParametersRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: req String,
        "Source" => source: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbClusterParametersResponse {
        "Parameters" => parameters: list Parameter,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbClusterParametersResponse, parameters: Parameter);

message! {
    #[builder(DescribeDbParameterGroups)]
    pub struct DescribeDbParameterGroupsRequest {
        "DBParameterGroupName" => db_parameter_group_name: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbParameterGroupsResponse {
        "Marker" => marker: opt String,
        "DBParameterGroups" => db_parameter_groups: list DbParameterGroup,
    }
}

pageable!(DescribeDbParameterGroupsResponse, db_parameter_groups: DbParameterGroup);

message! {
    #[builder(DescribeDbParameters)]
    pub struct DescribeDbParametersRequest {
        "DBParameterGroupName" => db_parameter_group_name: req String,
        /// Only return parameters from this source, e.g. `user`.
        "Source" => source: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbParametersResponse {
        "Parameters" => parameters: list Parameter,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeDbParametersResponse, parameters: Parameter);

message! {
    #[builder(DescribeEngineDefaultClusterParameters)]
    pub struct DescribeEngineDefaultClusterParametersRequest {
        "DBParameterGroupFamily" => db_parameter_group_family: req String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeEngineDefaultClusterParametersResponse {
        "EngineDefaults" => engine_defaults: opt EngineDefaults,
    }
}

message! {
    #[builder(DescribeEngineDefaultParameters)]
    pub struct DescribeEngineDefaultParametersRequest {
        "DBParameterGroupFamily" => db_parameter_group_family: req String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeEngineDefaultParametersResponse {
        "EngineDefaults" => engine_defaults: opt EngineDefaults,
    }
}

message! {
    /// Changes up to 20 parameters of a cluster parameter group.
    #[builder(ModifyDbClusterParameterGroup)]
    pub struct ModifyDbClusterParameterGroupRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: req String,
        "Parameters" => parameters: list Parameter,
    }
}

message! {
    pub struct ModifyDbClusterParameterGroupResponse {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
    }
}

message! {
    /// Changes up to 20 parameters of a parameter group.
    ///
    /// # Example
    /// ```
    /// # use rds_admin::model::{ModifyDbParameterGroupRequest, Parameter};
    /// let request = ModifyDbParameterGroupRequest::new()
    ///     .set_db_parameter_group_name("my-params")
    ///     .set_parameters([Parameter::new()
    ///         .set_parameter_name("max_connections")
    ///         .set_parameter_value("200")
    ///         .set_apply_method("pending-reboot")]);
    /// ```
    #[builder(ModifyDbParameterGroup)]
    pub struct ModifyDbParameterGroupRequest {
        "DBParameterGroupName" => db_parameter_group_name: req String,
        "Parameters" => parameters: list Parameter,
    }
}

message! {
    pub struct ModifyDbParameterGroupResponse {
        "DBParameterGroupName" => db_parameter_group_name: opt String,
    }
}

message! {
    #[builder(ResetDbClusterParameterGroup)]
    pub struct ResetDbClusterParameterGroupRequest {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: req String,
        "ResetAllParameters" => reset_all_parameters: opt bool,
        "Parameters" => parameters: list Parameter,
    }
}

message! {
    pub struct ResetDbClusterParameterGroupResponse {
        "DBClusterParameterGroupName" => db_cluster_parameter_group_name: opt String,
    }
}

message! {
    /// Resets some, or all, of the parameters of a group to the engine
    /// defaults.
    #[builder(ResetDbParameterGroup)]
    pub struct ResetDbParameterGroupRequest {
        "DBParameterGroupName" => db_parameter_group_name: req String,
        "ResetAllParameters" => reset_all_parameters: opt bool,
        "Parameters" => parameters: list Parameter,
    }
}

message! {
    pub struct ResetDbParameterGroupResponse {
        "DBParameterGroupName" => db_parameter_group_name: opt String,
    }
}
