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

//! Reserved instances: offerings and purchased reservations.

use super::*;

message! {
    pub struct RecurringCharge {
        "RecurringChargeAmount" => recurring_charge_amount: opt f64,
        "RecurringChargeFrequency" => recurring_charge_frequency: opt String,
    }
}

message! {
    /// A purchased reservation.
    pub struct ReservedDbInstance {
        "ReservedDBInstanceId" => reserved_db_instance_id: opt String,
        "ReservedDBInstancesOfferingId" => reserved_db_instances_offering_id: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        "StartTime" => start_time: opt Timestamp,
        /// In seconds.
        "Duration" => duration: opt i32,
        "FixedPrice" => fixed_price: opt f64,
        "UsagePrice" => usage_price: opt f64,
        "CurrencyCode" => currency_code: opt String,
        "DBInstanceCount" => db_instance_count: opt i32,
        "ProductDescription" => product_description: opt String,
        "OfferingType" => offering_type: opt String,
        "MultiAZ" => multi_az: opt bool,
        "State" => state: opt String,
        "RecurringCharges" => recurring_charges: list RecurringCharge,
        "ReservedDBInstanceArn" => reserved_db_instance_arn: opt String,
        "LeaseId" => lease_id: opt String,
    }
}

message! {
    /// A reservation available for purchase.
    pub struct ReservedDbInstancesOffering {
        "ReservedDBInstancesOfferingId" => reserved_db_instances_offering_id: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        "Duration" => duration: opt i32,
        "FixedPrice" => fixed_price: opt f64,
        "UsagePrice" => usage_price: opt f64,
        "CurrencyCode" => currency_code: opt String,
        "ProductDescription" => product_description: opt String,
        "OfferingType" => offering_type: opt String,
        "MultiAZ" => multi_az: opt bool,
        "RecurringCharges" => recurring_charges: list RecurringCharge,
    }
}

message! {
    #[builder(DescribeReservedDbInstances)]
    pub struct DescribeReservedDbInstancesRequest {
        "ReservedDBInstanceId" => reserved_db_instance_id: opt String,
        "ReservedDBInstancesOfferingId" => reserved_db_instances_offering_id: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        /// A duration in years (`1` or `3`) or seconds.
        "Duration" => duration: opt String,
        "ProductDescription" => product_description: opt String,
        /// `Partial Upfront`, `All Upfront`, or `No Upfront`.
        "OfferingType" => offering_type: opt String,
        "MultiAZ" => multi_az: opt bool,
        "LeaseId" => lease_id: opt String,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeReservedDbInstancesResponse {
        "Marker" => marker: opt String,
        "ReservedDBInstances" => reserved_db_instances: list ReservedDbInstance,
    }
}

pageable!(DescribeReservedDbInstancesResponse, reserved_db_instances: ReservedDbInstance);

message! {
    #[builder(DescribeReservedDbInstancesOfferings)]
    pub struct DescribeReservedDbInstancesOfferingsRequest {
        "ReservedDBInstancesOfferingId" => reserved_db_instances_offering_id: opt String,
        "DBInstanceClass" => db_instance_class: opt String,
        "Duration" => duration: opt String,
        "ProductDescription" => product_description: opt String,
        "OfferingType" => offering_type: opt String,
        "MultiAZ" => multi_az: opt bool,
        "Filters" => filters: list Filter,
        "MaxRecords" => max_records: opt i32,
        "Marker" => marker: opt String,
    }
}

message! {
    pub struct DescribeReservedDbInstancesOfferingsResponse {
        "Marker" => marker: opt String,
        "ReservedDBInstancesOfferings" => reserved_db_instances_offerings: list ReservedDbInstancesOffering,
    }
}

pageable!(
    DescribeReservedDbInstancesOfferingsResponse,
    reserved_db_instances_offerings: ReservedDbInstancesOffering
);

message! {
    #[builder(PurchaseReservedDbInstancesOffering)]
    pub struct PurchaseReservedDbInstancesOfferingRequest {
        "ReservedDBInstancesOfferingId" => reserved_db_instances_offering_id: req String,
        /// A customer-specified identifier to track this reservation.
        "ReservedDBInstanceId" => reserved_db_instance_id: opt String,
        /// Defaults to 1.
        "DBInstanceCount" => db_instance_count: opt i32,
        "Tags" => tags: list Tag,
    }
}

message! {
    pub struct PurchaseReservedDbInstancesOfferingResponse {
        "ReservedDBInstance" => reserved_db_instance: opt ReservedDbInstance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prices() -> anyhow::Result<()> {
        let input = json!({
            "ReservedDBInstancesOfferingId": "438012d3-4052-4cc7-b2e3-8d3372e0e706",
            "FixedPrice": 1820.0,
            "UsagePrice": 0.368,
            "MultiAZ": true,
            "RecurringCharges": [
                {"RecurringChargeAmount": 0.25, "RecurringChargeFrequency": "Hourly"}
            ],
        });
        let got = serde_json::from_value::<ReservedDbInstancesOffering>(input.clone())?;
        assert_eq!(got.fixed_price, Some(1820.0));
        assert_eq!(got.multi_az, Some(true));
        assert_eq!(got.recurring_charges.len(), 1);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }
}
