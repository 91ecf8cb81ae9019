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

//! Network access: DB security groups and DB subnet groups.

use super::*;

message! {
    /// Controls access to instances outside a VPC.
    pub struct DbSecurityGroup {
        "OwnerId" => owner_id: opt String,
        "DBSecurityGroupName" => db_security_group_name: opt String,
        "DBSecurityGroupDescription" => db_security_group_description: opt String,
        "VpcId" => vpc_id: opt String,
        "EC2SecurityGroups" => ec2_security_groups: list Ec2SecurityGroup,
        "IPRanges" => ip_ranges: list IpRange,
        "DBSecurityGroupArn" => db_security_group_arn: opt String,
    }
}

message! {
    pub struct Ec2SecurityGroup {
        /// `authorizing`, `authorized`, `revoking`, or `revoked`.
        "Status" => status: opt String,
        "EC2SecurityGroupName" => ec2_security_group_name: opt String,
        "EC2SecurityGroupId" => ec2_security_group_id: opt String,
        "EC2SecurityGroupOwnerId" => ec2_security_group_owner_id: opt String,
    }
}

message! {
    pub struct IpRange {
        "Status" => status: opt String,
        "CIDRIP" => cidrip: opt String,
    }
}

message! {
    /// Grants access to a DB security group.
    ///
    /// Set `cidrip` to authorize an IP range, or one of the
    /// `ec2_security_group_*` fields to authorize an EC2 security group.
    #[builder(AuthorizeDbSecurityGroupIngress)]
    pub struct AuthorizeDbSecurityGroupIngressRequest {
        "DBSecurityGroupName" => db_security_group_name: req String,
        "CIDRIP" => cidrip: opt String,
        "EC2SecurityGroupName" => ec2_security_group_name: opt String,
        "EC2SecurityGroupId" => ec2_security_group_id: opt String,
        "EC2SecurityGroupOwnerId" => ec2_security_group_owner_id: opt String,
    }
}

message! {
    pub struct AuthorizeDbSecurityGroupIngressResponse {
        "DBSecurityGroup" => db_security_group: opt DbSecurityGroup,
    }
}

message! {
    #[builder(RevokeDbSecurityGroupIngress)]
    pub struct RevokeDbSecurityGroupIngressRequest {
        "DBSecurityGroupName" => db_security_group_name: req String,
        "CIDRIP" => cidrip: opt String,
        "EC2SecurityGroupName" => ec2_security_group_name: opt String,
        "EC2SecurityGroupId" => ec2_security_group_id: opt String,
        "EC2SecurityGroupOwnerId" => ec2_security_group_owner_id: opt String,
    }
}

message! {
    pub struct RevokeDbSecurityGroupIngressResponse {
        "DBSecurityGroup" => db_security_group: opt DbSecurityGroup,
    }
}

message! {
    #[builder(CreateDbSecurityGroup)]
    pub struct CreateDbSecurityGroupRequest {
        "DBSecurityGroupName" => db_security_group_name: req String,
        "DBSecurityGroupDescription" => db_security_group_description: req String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbSecurityGroupResponse {
        "DBSecurityGroup" => db_security_group: opt DbSecurityGroup,
    }
}

message! {
    #[builder(DeleteDbSecurityGroup)]
    pub struct DeleteDbSecurityGroupRequest {
        "DBSecurityGroupName" => db_security_group_name: req String,
    }
}

message! {
    #[builder(DescribeDbSecurityGroups)]
    pub struct DescribeDbSecurityGroupsRequest {
        "DBSecurityGroupName" => db_security_group_name: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbSecurityGroupsResponse {
        "Marker" => marker: opt String,
        "DBSecurityGroups" => db_security_groups: list DbSecurityGroup,
    }
}

pageable!(DescribeDbSecurityGroupsResponse, db_security_groups: DbSecurityGroup);

message! {
    /// A set of VPC subnets where instances and clusters may be placed.
    pub struct DbSubnetGroup {
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "DBSubnetGroupDescription" => db_subnet_group_description: opt String,
        "VpcId" => vpc_id: opt String,
        "SubnetGroupStatus" => subnet_group_status: opt String,
        "Subnets" => subnets: list Subnet,
        "DBSubnetGroupArn" => db_subnet_group_arn: opt String,
    }
}

message! {
    /// Creates a subnet group.
    ///
    /// The subnets must cover at least two availability zones in the region.
    #[builder(CreateDbSubnetGroup)]
    pub struct CreateDbSubnetGroupRequest {
        "DBSubnetGroupName" => db_subnet_group_name: req String,
        "DBSubnetGroupDescription" => db_subnet_group_description: req String,
        "SubnetIds" => subnet_ids: list String,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct CreateDbSubnetGroupResponse {
        "DBSubnetGroup" => db_subnet_group: opt DbSubnetGroup,
    }
}

message! {
    #[builder(DeleteDbSubnetGroup)]
    pub struct DeleteDbSubnetGroupRequest {
        "DBSubnetGroupName" => db_subnet_group_name: req String,
    }
}

message! {
    #[builder(DescribeDbSubnetGroups)]
    pub struct DescribeDbSubnetGroupsRequest {
        "DBSubnetGroupName" => db_subnet_group_name: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeDbSubnetGroupsResponse {
        "Marker" => marker: opt String,
        "DBSubnetGroups" => db_subnet_groups: list DbSubnetGroup,
    }
}

pageable!(DescribeDbSubnetGroupsResponse, db_subnet_groups: DbSubnetGroup);

message! {
    #[builder(ModifyDbSubnetGroup)]
    pub struct ModifyDbSubnetGroupRequest {
        "DBSubnetGroupName" => db_subnet_group_name: req String,
        "DBSubnetGroupDescription" => db_subnet_group_description: opt String,
        /// Replaces the subnets in the group.
        "SubnetIds" => subnet_ids: list String,
    }
}

message! {
    pub struct ModifyDbSubnetGroupResponse {
        "DBSubnetGroup" => db_subnet_group: opt DbSubnetGroup,
    }
}
