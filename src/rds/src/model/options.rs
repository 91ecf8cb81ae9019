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

//! Option groups, the engine features (such as Oracle TDE or SQL Server
//! native backups) enabled on instances.

use super::*;

message! {
    pub struct OptionGroup {
        "OptionGroupName" => option_group_name: opt String,
        "OptionGroupDescription" => option_group_description: opt String,
        "EngineName" => engine_name: opt String,
        "MajorEngineVersion" => major_engine_version: opt String,
        "Options" => options: list OptionItem,
        "AllowsVpcAndNonVpcInstanceMemberships" => allows_vpc_and_non_vpc_instance_memberships: opt bool,
        "VpcId" => vpc_id: opt String,
        "OptionGroupArn" => option_group_arn: opt String,
    }
}

message! {
    /// An option enabled in an option group.
    ///
    /// The service calls this shape `Option`, it is renamed to avoid
    /// confusion with [std::option::Option].
    pub struct OptionItem {
        "OptionName" => option_name: opt String,
        "OptionDescription" => option_description: opt String,
        "Persistent" => persistent: opt bool,
        "Permanent" => permanent: opt bool,
        "Port" => port: opt i32,
        "OptionVersion" => option_version: opt String,
        "OptionSettings" => option_settings: list OptionSetting,
        "DBSecurityGroupMemberships" => db_security_group_memberships: list DbSecurityGroupMembership,
        "VpcSecurityGroupMemberships" => vpc_security_group_memberships: list VpcSecurityGroupMembership,
    }
}

message! {
    pub struct OptionSetting {
        "Name" => name: opt String,
        "Value" => value: opt String,
        "DefaultValue" => default_value: opt String,
        "Description" => description: opt String,
        "ApplyType" => apply_type: opt String,
        "DataType" => data_type: opt String,
        "AllowedValues" => allowed_values: opt String,
        "IsModifiable" => is_modifiable: opt bool,
        "IsCollection" => is_collection: opt bool,
    }
}

message! {
    /// An option to add, or update, in an option group.
    pub struct OptionConfiguration {
        "OptionName" => option_name: req String,
        "Port" => port: opt i32,
        "OptionVersion" => option_version: opt String,
        "DBSecurityGroupMemberships" => db_security_group_memberships: list String,
        "VpcSecurityGroupMemberships" => vpc_security_group_memberships: list String,
        "OptionSettings" => option_settings: list OptionSetting,
    }
}

message! {
    pub struct MinimumEngineVersionPerAllowedValue {
        "AllowedValue" => allowed_value: opt String,
        "MinimumEngineVersion" => minimum_engine_version: opt String,
    }
}

message! {
    pub struct OptionGroupOptionSetting {
        "SettingName" => setting_name: opt String,
        "SettingDescription" => setting_description: opt String,
        "DefaultValue" => default_value: opt String,
        "ApplyType" => apply_type: opt String,
        "AllowedValues" => allowed_values: opt String,
        "IsModifiable" => is_modifiable: opt bool,
        "IsRequired" => is_required: opt bool,
        "MinimumEngineVersionPerAllowedValue" => minimum_engine_version_per_allowed_value: list MinimumEngineVersionPerAllowedValue,
    }
}

message! {
    pub struct OptionVersion {
        "Version" => version: opt String,
        "IsDefault" => is_default: opt bool,
    }
}

message! {
    /// An option available to an engine and major version.
    pub struct OptionGroupOption {
        "Name" => name: opt String,
        "Description" => description: opt String,
        "EngineName" => engine_name: opt String,
        "MajorEngineVersion" => major_engine_version: opt String,
        "MinimumRequiredMinorEngineVersion" => minimum_required_minor_engine_version: opt String,
        "PortRequired" => port_required: opt bool,
        "DefaultPort" => default_port: opt i32,
        "OptionsDependedOn" => options_depended_on: list String,
        "OptionsConflictsWith" => options_conflicts_with: list String,
        "Persistent" => persistent: opt bool,
        "Permanent" => permanent: opt bool,
        "RequiresAutoMinorEngineVersionUpgrade" => requires_auto_minor_engine_version_upgrade: opt bool,
        "VpcOnly" => vpc_only: opt bool,
        "SupportsOptionVersionDowngrade" => supports_option_version_downgrade: opt bool,
        "OptionGroupOptionSettings" => option_group_option_settings: list OptionGroupOptionSetting,
        "OptionGroupOptionVersions" => option_group_option_versions: list OptionVersion,
    }
}

message! {
    #[builder(CopyOptionGroup)]
    pub struct CopyOptionGroupRequest {
        "SourceOptionGroupIdentifier" => source_option_group_identifier: req String,
        "TargetOptionGroupIdentifier" => target_option_group_identifier: req String,
        "TargetOptionGroupDescription" => target_option_group_description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CopyOptionGroupResponse {
        "OptionGroup" => option_group: opt OptionGroup,
    }
}

message! {
    #[builder(CreateOptionGroup)]
    pub struct CreateOptionGroupRequest {
        "OptionGroupName" => option_group_name: req String,
        "EngineName" => engine_name: req String,
        "MajorEngineVersion" => major_engine_version: req String,
        "OptionGroupDescription" => option_group_description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateOptionGroupResponse {
        "OptionGroup" => option_group: opt OptionGroup,
    }
}

message! {
    /// Deletes an option group. Default option groups cannot be deleted.
    #[builder(DeleteOptionGroup)]
    pub struct DeleteOptionGroupRequest {
        "OptionGroupName" => option_group_name: req String,
    }
}

message! {
    #[builder(DescribeOptionGroupOptions)]
    pub struct DescribeOptionGroupOptionsRequest {
        "EngineName" => engine_name: req String,
        "MajorEngineVersion" => major_engine_version: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeOptionGroupOptionsResponse {
        "OptionGroupOptions" => option_group_options: list OptionGroupOption,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeOptionGroupOptionsResponse, option_group_options: OptionGroupOption);

message! {
    #[builder(DescribeOptionGroups)]
    pub struct DescribeOptionGroupsRequest {
        "OptionGroupName" => option_group_name: opt String,
        "Filters" => filters: list Filter,
        "Marker" => marker: opt String,
        "MaxRecords" => max_records: opt i32,
        "EngineName" => engine_name: opt String,
        "MajorEngineVersion" => major_engine_version: opt String,
    }
}

message! {
    pub struct DescribeOptionGroupsResponse {
        "OptionGroupsList" => option_groups_list: list OptionGroup,
        "Marker" => marker: opt String,
    }
}

pageable!(DescribeOptionGroupsResponse, option_groups_list: OptionGroup);

message! {
    /// Adds, updates, or removes options in an option group.
    #[builder(ModifyOptionGroup)]
    pub struct ModifyOptionGroupRequest {
        "OptionGroupName" => option_group_name: req String,
        "OptionsToInclude" => options_to_include: list OptionConfiguration,
        "OptionsToRemove" => options_to_remove: list String,
        "ApplyImmediately" => apply_immediately: opt bool,
    }
}

message! {
    pub struct ModifyOptionGroupResponse {
        "OptionGroup" => option_group: opt OptionGroup,
    }
}
