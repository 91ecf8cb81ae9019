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

//! Shapes shared by many resources and operations.

message! {
    /// Metadata assigned to a resource, consisting of a key-value pair.
    pub struct Tag {
        "Key" => key: opt String,
        "Value" => value: opt String,
    }
}

message! {
    /// A filter used to return a more specific list of results from a
    /// `Describe*` operation.
    ///
    /// # Example
    /// ```
    /// # use rds_admin::model::Filter;
    /// let filter = Filter::new()
    ///     .set_name("engine")
    ///     .set_values(["postgres", "mysql"]);
    /// assert_eq!(filter.values.len(), 2);
    /// ```
    pub struct Filter {
        /// The name of the filter. Filter names are case-sensitive.
        "Name" => name: req String,
        /// One or more filter values. Filter values are case-sensitive.
        "Values" => values: list String,
    }
}

message! {
    /// The connection endpoint of a database instance.
    pub struct Endpoint {
        "Address" => address: opt String,
        "Port" => port: opt i32,
        "HostedZoneId" => hosted_zone_id: opt String,
    }
}

message! {
    pub struct AvailabilityZone {
        "Name" => name: opt String,
    }
}

message! {
    /// A data center that extends the service infrastructure to a customer
    /// location.
    pub struct Outpost {
        "Arn" => arn: opt String,
    }
}

message! {
    /// A subnet in a DB subnet group.
    pub struct Subnet {
        "SubnetIdentifier" => subnet_identifier: opt String,
        "SubnetAvailabilityZone" => subnet_availability_zone: opt AvailabilityZone,
        "SubnetOutpost" => subnet_outpost: opt Outpost,
        "SubnetStatus" => subnet_status: opt String,
    }
}

message! {
    /// A VPC security group associated with a resource.
    pub struct VpcSecurityGroupMembership {
        "VpcSecurityGroupId" => vpc_security_group_id: opt String,
        "Status" => status: opt String,
    }
}

message! {
    /// A DB security group associated with a database instance.
    pub struct DbSecurityGroupMembership {
        "DBSecurityGroupName" => db_security_group_name: opt String,
        "Status" => status: opt String,
    }
}

message! {
    /// An Active Directory domain membership.
    pub struct DomainMembership {
        "Domain" => domain: opt String,
        "Status" => status: opt String,
        "FQDN" => fqdn: opt String,
        "IAMRoleName" => iam_role_name: opt String,
    }
}

message! {
    /// The number of CPU cores and threads per core of a database instance
    /// class.
    pub struct ProcessorFeature {
        "Name" => name: opt String,
        "Value" => value: opt String,
    }
}

message! {
    pub struct AvailableProcessorFeature {
        "Name" => name: opt String,
        "DefaultValue" => default_value: opt String,
        "AllowedValues" => allowed_values: opt String,
    }
}

message! {
    /// Log types to enable or disable when exporting logs to CloudWatch.
    pub struct CloudwatchLogsExportConfiguration {
        "EnableLogTypes" => enable_log_types: list String,
        "DisableLogTypes" => disable_log_types: list String,
    }
}

message! {
    /// Log types that are in the process of being enabled or disabled.
    pub struct PendingCloudwatchLogsExports {
        "LogTypesToEnable" => log_types_to_enable: list String,
        "LogTypesToDisable" => log_types_to_disable: list String,
    }
}

message! {
    /// A range of integer values.
    pub struct Range {
        "From" => from: opt i32,
        "To" => to: opt i32,
        "Step" => step: opt i32,
    }
}

message! {
    /// A range of double values.
    pub struct DoubleRange {
        "From" => from: opt f64,
        "To" => to: opt f64,
    }
}

message! {
    pub struct Timezone {
        "TimezoneName" => timezone_name: opt String,
    }
}

message! {
    /// The scaling configuration of an Aurora Serverless cluster.
    pub struct ScalingConfiguration {
        "MinCapacity" => min_capacity: opt i32,
        "MaxCapacity" => max_capacity: opt i32,
        "AutoPause" => auto_pause: opt bool,
        "SecondsUntilAutoPause" => seconds_until_auto_pause: opt i32,
        "TimeoutAction" => timeout_action: opt String,
    }
}

message! {
    /// The scaling configuration reported for an Aurora Serverless cluster.
    pub struct ScalingConfigurationInfo {
        "MinCapacity" => min_capacity: opt i32,
        "MaxCapacity" => max_capacity: opt i32,
        "AutoPause" => auto_pause: opt bool,
        "SecondsUntilAutoPause" => seconds_until_auto_pause: opt i32,
        "TimeoutAction" => timeout_action: opt String,
    }
}
